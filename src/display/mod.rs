//! Display formatting for terminal output
//!
//! Formats data models and derived views for the terminal.

pub mod expense;
pub mod report;

pub use expense::format_expense_table;
pub use report::{format_insights, format_summary, format_trend};
