//! Aggregate totals over the expense collection
//!
//! Category totals, monthly totals, the cumulative spending series, and
//! the days-since-last-entry figure. All pure functions over a snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Total spend for one month bucket
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// `"YYYY-MM"` month key
    pub month: String,
    pub total: Money,
}

/// One point of the cumulative spending series
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub running_total: Money,
}

/// The `"YYYY-MM"` month bucket for a date
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Sum of all amounts
pub fn grand_total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts grouped by category, in first-seen order
pub fn category_totals(expenses: &[Expense]) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    totals
}

/// Sum of amounts grouped by month key, ascending by key
///
/// Lexicographic order on `"YYYY-MM"` is chronological order.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *buckets.entry(expense.month_key()).or_insert_with(Money::zero) += expense.amount;
    }
    buckets
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Running total of spend, one point per record, ordered by date ascending
pub fn cumulative_series(expenses: &[Expense]) -> Vec<CumulativePoint> {
    let mut ordered: Vec<&Expense> = expenses.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let mut running = Money::zero();
    ordered
        .into_iter()
        .map(|expense| {
            running += expense.amount;
            CumulativePoint {
                date: expense.date,
                running_total: running,
            }
        })
        .collect()
}

/// Whole days between today and the most recent record date
///
/// `None` when there are no records.
pub fn days_since_last(expenses: &[Expense], today: NaiveDate) -> Option<i64> {
    expenses
        .iter()
        .map(|e| e.date)
        .max()
        .map(|latest| (today - latest).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, cents: i64, date: &str, category: Category) -> Expense {
        Expense::with_details(
            ExpenseId::from_raw(id),
            "Test",
            Money::from_cents(cents),
            date.parse().unwrap(),
            category,
        )
    }

    fn january_scenario() -> Vec<Expense> {
        vec![
            expense(1, 500, "2024-01-05", Category::FoodAndDrink),
            expense(2, 200, "2024-01-20", Category::Transportation),
        ]
    }

    #[test]
    fn test_category_totals_scenario() {
        let totals = category_totals(&january_scenario());
        assert_eq!(
            totals,
            vec![
                (Category::FoodAndDrink, Money::from_cents(500)),
                (Category::Transportation, Money::from_cents(200)),
            ]
        );
    }

    #[test]
    fn test_monthly_totals_scenario() {
        let totals = monthly_totals(&january_scenario());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month, "2024-01");
        assert_eq!(totals[0].total, Money::from_cents(700));
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let expenses = vec![
            expense(1, 100, "2024-01-01", Category::Bills),
            expense(2, 200, "2024-01-02", Category::FoodAndDrink),
            expense(3, 300, "2024-01-03", Category::Bills),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(totals[0], (Category::Bills, Money::from_cents(400)));
        assert_eq!(totals[1], (Category::FoodAndDrink, Money::from_cents(200)));
    }

    #[test]
    fn test_totals_agree_with_grand_total() {
        let expenses = vec![
            expense(1, 550, "2024-01-05", Category::FoodAndDrink),
            expense(2, -120, "2024-02-20", Category::Shopping),
            expense(3, 995, "2024-02-25", Category::Bills),
            expense(4, 40, "2024-03-01", Category::FoodAndDrink),
        ];

        let grand = grand_total(&expenses);
        let by_category: Money = category_totals(&expenses).iter().map(|(_, m)| *m).sum();
        let by_month: Money = monthly_totals(&expenses).iter().map(|m| m.total).sum();

        assert_eq!(grand, by_category);
        assert_eq!(grand, by_month);
        assert_eq!(grand, Money::from_cents(1465));
    }

    #[test]
    fn test_monthly_totals_sorted_ascending() {
        let expenses = vec![
            expense(1, 100, "2024-03-01", Category::Other),
            expense(2, 100, "2023-11-01", Category::Other),
            expense(3, 100, "2024-01-01", Category::Other),
        ];
        let months: Vec<String> = monthly_totals(&expenses)
            .into_iter()
            .map(|m| m.month)
            .collect();
        assert_eq!(months, vec!["2023-11", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_cumulative_series_length_and_order() {
        let expenses = vec![
            expense(1, 300, "2024-02-01", Category::Other),
            expense(2, 100, "2024-01-01", Category::Other),
            expense(3, 200, "2024-01-15", Category::Other),
        ];
        let series = cumulative_series(&expenses);
        assert_eq!(series.len(), expenses.len());
        assert_eq!(series[0].running_total, Money::from_cents(100));
        assert_eq!(series[1].running_total, Money::from_cents(300));
        assert_eq!(series[2].running_total, Money::from_cents(600));
    }

    #[test]
    fn test_cumulative_series_non_decreasing_for_non_negative_amounts() {
        let expenses = vec![
            expense(1, 0, "2024-01-01", Category::Other),
            expense(2, 250, "2024-01-02", Category::Other),
            expense(3, 50, "2024-01-03", Category::Other),
        ];
        let series = cumulative_series(&expenses);
        assert!(series.windows(2).all(|w| w[0].running_total <= w[1].running_total));
    }

    #[test]
    fn test_cumulative_series_can_decrease_with_refunds() {
        let expenses = vec![
            expense(1, 500, "2024-01-01", Category::Other),
            expense(2, -200, "2024-01-02", Category::Other),
        ];
        let series = cumulative_series(&expenses);
        assert!(series[1].running_total < series[0].running_total);
    }

    #[test]
    fn test_days_since_last() {
        let today: NaiveDate = "2024-02-01".parse().unwrap();
        assert_eq!(days_since_last(&[], today), None);

        let expenses = january_scenario();
        assert_eq!(days_since_last(&expenses, today), Some(12));
    }
}
