//! Expense list formatting
//!
//! Renders expense snapshots as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Theme;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.to_string(),
            reason: truncate(&expense.reason, 32),
            category: format!("{} {}", expense.category.icon(), expense.category),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format a list of expenses as a table
///
/// The theme picks the border set: rounded corners read better on light
/// backgrounds, the heavier modern borders on dark ones.
pub fn format_expense_table(expenses: &[Expense], theme: Theme) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    match theme {
        Theme::Light => {
            table.with(Style::rounded());
        }
        Theme::Dark => {
            table.with(Style::modern());
        }
    }
    format!("{}\n", table)
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
