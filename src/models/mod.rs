//! Core data models for outlay
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, categories, and money amounts.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{Expense, ExpenseId, ExpenseValidationError};
pub use money::Money;
