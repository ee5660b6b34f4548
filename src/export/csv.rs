//! CSV export functionality
//!
//! Writes the record snapshot with a fixed column order. Every field is
//! escaped individually; an empty snapshot is refused so the user never
//! downloads a header-only file.

use std::io::Write;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Column order for CSV and spreadsheet exports
pub const CSV_COLUMNS: [&str; 5] = ["id", "reason", "amount", "date", "category"];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> OutlayResult<()> {
    if expenses.is_empty() {
        return Err(OutlayError::Export("No expenses to export".into()));
    }

    writeln!(writer, "{}", CSV_COLUMNS.join(","))
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&expense.id.to_string()),
            escape_csv(&expense.reason),
            escape_csv(&format!("{:.2}", expense.amount.to_units_f64())),
            escape_csv(&expense.date.to_string()),
            escape_csv(expense.category.label()),
        )
        .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
