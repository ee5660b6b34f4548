//! JSON export functionality
//!
//! Writes the record snapshot as a pretty-printed array in a stable wire
//! shape: amounts in decimal currency units, dates and categories as their
//! display strings. The importer reads this shape back, so an export
//! followed by an import reproduces the records.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Wire representation of one expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub reason: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.value(),
            reason: expense.reason.clone(),
            amount: expense.amount.to_units_f64(),
            date: expense.date.to_string(),
            category: expense.category.label().to_string(),
        }
    }
}

/// Export expenses to pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: &mut W) -> OutlayResult<()> {
    let records: Vec<ExpenseRecord> = expenses.iter().map(ExpenseRecord::from).collect();

    serde_json::to_writer_pretty(writer, &records)
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    Ok(())
}
