//! Report and insight formatting for the terminal
//!
//! Text-block summaries in place of the charts a graphical frontend would
//! draw: category breakdown, monthly totals, cumulative trend, budget
//! meter, spending tips.

use chrono::NaiveDate;

use crate::models::{Expense, Money};
use crate::reports::{
    category_totals, cumulative_series, days_since_last, grand_total, monthly_totals,
    percent_of_budget, Insight,
};

/// Format the spending summary for a snapshot
pub fn format_summary(expenses: &[Expense], budget: Money, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str("Spending Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if expenses.is_empty() {
        output.push_str("No expenses recorded yet.\n");
        return output;
    }

    let total = grand_total(expenses);
    output.push_str(&format!("Total spent:  {}\n", total));
    output.push_str(&format!("Records:      {}\n", expenses.len()));

    if let Some(days) = days_since_last(expenses, today) {
        output.push_str(&format!("Last expense: {} day(s) ago\n", days));
    }

    if budget.is_positive() {
        let percent = percent_of_budget(total, budget);
        output.push_str(&format!(
            "Budget:       {} of {} ({:.0}%)\n",
            total.abs(),
            budget,
            percent * 100.0
        ));
    }

    output.push_str("\nBy category:\n");
    for (category, amount) in category_totals(expenses) {
        output.push_str(&format!(
            "  {} {:<16} {:>10}\n",
            category.icon(),
            category.label(),
            amount.to_string()
        ));
    }

    output.push_str("\nBy month:\n");
    for monthly in monthly_totals(expenses) {
        output.push_str(&format!(
            "  {:<10} {:>10}\n",
            monthly.month,
            monthly.total.to_string()
        ));
    }

    output
}

/// Format the cumulative spending trend, most recent points last
pub fn format_trend(expenses: &[Expense], limit: usize) -> String {
    let series = cumulative_series(expenses);
    if series.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Cumulative spend:\n");
    let skip = series.len().saturating_sub(limit);
    for point in series.iter().skip(skip) {
        output.push_str(&format!(
            "  {}  {:>10}\n",
            point.date,
            point.running_total.to_string()
        ));
    }
    output
}

/// Format spending tips as a bullet list
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No tips this month. Keep logging expenses.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Spending tips:\n");
    for insight in insights {
        output.push_str(&format!("  - {}\n", insight.message));
    }
    output
}
