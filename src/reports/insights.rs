//! Rule-based spending insights
//!
//! Compares the current calendar month with the one before it, per
//! category, and emits plain-language tips. No model, no history beyond
//! two months; these are deliberately simple heuristics.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Category, Expense, Money};

use super::totals::{grand_total, month_key};

/// Month-over-month change threshold (percent) before a tip fires
const CHANGE_THRESHOLD_PCT: f64 = 25.0;

/// What kind of observation a tip carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    BudgetExceeded,
    NewSpending,
    IncreasedSpending,
    DecreasedSpending,
}

/// A single spending tip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// The category the tip is about; absent for the budget alert
    pub category: Option<Category>,
    pub message: String,
}

/// Fraction of the budget consumed, clamped to 1.0
///
/// A zero or negative budget disables the meter and yields 0.
pub fn percent_of_budget(total: Money, budget: Money) -> f64 {
    if budget.cents() <= 0 {
        return 0.0;
    }
    (total.abs().cents() as f64 / budget.cents() as f64).min(1.0)
}

/// Generate spending tips for the month containing `today`
///
/// Tip order: the budget alert (if any) first, then category tips over the
/// merged key set of current-month and previous-month categories, current
/// month's first-seen order leading.
pub fn generate_insights(expenses: &[Expense], budget: Money, today: NaiveDate) -> Vec<Insight> {
    let current_key = month_key(today);
    let previous_key = month_key(previous_month(today));

    let current = per_category_totals(expenses, &current_key);
    let previous = per_category_totals(expenses, &previous_key);

    let mut categories: Vec<Category> = current.iter().map(|(c, _)| *c).collect();
    for (category, _) in &previous {
        if !categories.contains(category) {
            categories.push(*category);
        }
    }

    let mut insights = Vec::new();

    for category in categories {
        let cur = lookup(&current, category);
        let prev = lookup(&previous, category);

        if prev.is_zero() && cur.is_positive() {
            insights.push(Insight {
                kind: InsightKind::NewSpending,
                category: Some(category),
                message: format!("New spending in {} this month: {}.", category, cur),
            });
        } else if prev.is_positive() {
            let change_pct =
                (cur.cents() - prev.cents()) as f64 / prev.cents() as f64 * 100.0;
            if change_pct > CHANGE_THRESHOLD_PCT {
                insights.push(Insight {
                    kind: InsightKind::IncreasedSpending,
                    category: Some(category),
                    message: format!(
                        "{} spending is up {}% from last month.",
                        category,
                        change_pct.round() as i64
                    ),
                });
            } else if change_pct < -CHANGE_THRESHOLD_PCT {
                insights.push(Insight {
                    kind: InsightKind::DecreasedSpending,
                    category: Some(category),
                    message: format!(
                        "{} spending is down {}% from last month. Nice job!",
                        category,
                        change_pct.abs().round() as i64
                    ),
                });
            }
        }
    }

    let total = grand_total(expenses);
    if budget.is_positive() && total.abs() > budget {
        insights.insert(
            0,
            Insight {
                kind: InsightKind::BudgetExceeded,
                category: None,
                message: format!(
                    "Total spending {} has exceeded your budget of {}.",
                    total.abs(),
                    budget
                ),
            },
        );
    }

    insights
}

/// Per-category totals restricted to one month key, first-seen order
fn per_category_totals(expenses: &[Expense], key: &str) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();
    for expense in expenses.iter().filter(|e| e.month_key() == key) {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    totals
}

fn lookup(totals: &[(Category, Money)], category: Category) -> Money {
    totals
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, m)| *m)
        .unwrap_or_else(Money::zero)
}

/// Some day in the calendar month before the one containing `date`
fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).expect("day 1 is valid for every month");
    first.pred_opt().expect("dates this low are unreachable")
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

    fn today() -> NaiveDate {
        "2024-02-15".parse().unwrap()
    }

    #[test]
    fn test_percent_of_budget_zero_budget() {
        assert_eq!(percent_of_budget(Money::from_cents(9999), Money::zero()), 0.0);
    }

    #[test]
    fn test_percent_of_budget_clamped() {
        // budget 10, spend 15 -> clamped to 1
        assert_eq!(
            percent_of_budget(Money::from_cents(1500), Money::from_cents(1000)),
            1.0
        );
        assert_eq!(
            percent_of_budget(Money::from_cents(500), Money::from_cents(1000)),
            0.5
        );
    }

    #[test]
    fn test_new_spending_tip() {
        let expenses = vec![expense(1, 2000, "2024-02-10", Category::Entertainment)];
        let insights = generate_insights(&expenses, Money::zero(), today());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::NewSpending);
        assert_eq!(insights[0].category, Some(Category::Entertainment));
        assert!(insights[0].message.contains("$20.00"));
    }

    #[test]
    fn test_increased_spending_tip() {
        let expenses = vec![
            expense(1, 1000, "2024-01-10", Category::FoodAndDrink),
            expense(2, 1500, "2024-02-10", Category::FoodAndDrink),
        ];
        let insights = generate_insights(&expenses, Money::zero(), today());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::IncreasedSpending);
        assert!(insights[0].message.contains("50%"));
    }

    #[test]
    fn test_decreased_spending_tip() {
        let expenses = vec![
            expense(1, 2000, "2024-01-10", Category::Shopping),
            expense(2, 1000, "2024-02-10", Category::Shopping),
        ];
        let insights = generate_insights(&expenses, Money::zero(), today());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::DecreasedSpending);
        assert!(insights[0].message.contains("50%"));
        assert!(insights[0].message.contains("Nice job"));
    }

    #[test]
    fn test_small_change_stays_quiet() {
        let expenses = vec![
            expense(1, 1000, "2024-01-10", Category::Bills),
            expense(2, 1100, "2024-02-10", Category::Bills),
        ];
        let insights = generate_insights(&expenses, Money::zero(), today());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_budget_alert_comes_first() {
        let expenses = vec![
            expense(1, 500, "2024-01-10", Category::FoodAndDrink),
            expense(2, 1000, "2024-02-10", Category::FoodAndDrink),
        ];
        // budget 10, total spend 15
        let insights = generate_insights(&expenses, Money::from_cents(1000), today());

        assert!(insights.len() >= 2);
        assert_eq!(insights[0].kind, InsightKind::BudgetExceeded);
        assert_eq!(insights[1].kind, InsightKind::IncreasedSpending);
    }

    #[test]
    fn test_category_order_merges_current_then_previous() {
        let expenses = vec![
            // previous-month-only category
            expense(1, 1000, "2024-01-05", Category::Bills),
            // current month categories in entry order
            expense(2, 1000, "2024-02-01", Category::Shopping),
            expense(3, 1000, "2024-02-02", Category::FoodAndDrink),
        ];
        let insights = generate_insights(&expenses, Money::zero(), today());

        let categories: Vec<Option<Category>> =
            insights.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                Some(Category::Shopping),
                Some(Category::FoodAndDrink),
                Some(Category::Bills),
            ]
        );
        assert_eq!(insights[2].kind, InsightKind::DecreasedSpending);
    }

    #[test]
    fn test_vanished_category_reads_as_decrease() {
        let expenses = vec![expense(1, 1000, "2024-01-05", Category::Bills)];
        let insights = generate_insights(&expenses, Money::zero(), today());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::DecreasedSpending);
        assert!(insights[0].message.contains("100%"));
    }
}
