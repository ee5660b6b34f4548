//! Expense record model
//!
//! A single spending entry: what it was for, how much, when, and which
//! category it belongs to.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;

/// Identifier for an expense record
///
/// Ids are derived from the creation timestamp in milliseconds. They are
/// unique enough for a personal-scale dataset; the store does not enforce
/// uniqueness beyond the generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an id from a raw value
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Create an id from the current wall-clock time
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Get the raw value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Derive a nearby id, used by the importer to spread ids across rows
    pub const fn offset(&self, delta: i64) -> Self {
        Self(self.0 + delta)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub reason: String,

    /// Amount spent (negative for refunds/corrections)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Spending category
    #[serde(default)]
    pub category: Category,
}

impl Expense {
    /// Create a new expense dated and id-stamped now
    pub fn new(reason: impl Into<String>, amount: Money, category: Category) -> Self {
        Self {
            id: ExpenseId::now(),
            reason: reason.into(),
            amount,
            date: Utc::now().date_naive(),
            category,
        }
    }

    /// Create an expense with every field supplied
    pub fn with_details(
        id: ExpenseId,
        reason: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id,
            reason: reason.into(),
            amount,
            date,
            category,
        }
    }

    /// The `"YYYY-MM"` month bucket this expense falls in
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Validate a record created through the add form
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyReason);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.reason,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyReason,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReason => write!(f, "Expense reason cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::with_details(
            ExpenseId::from_raw(1),
            "Coffee",
            Money::from_cents(500),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::FoodAndDrink,
        )
    }

    #[test]
    fn test_new_expense_stamps_id_and_date() {
        let expense = Expense::new("Lunch", Money::from_cents(1250), Category::FoodAndDrink);
        assert!(expense.id.value() > 0);
        assert_eq!(expense.reason, "Lunch");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(sample().month_key(), "2024-01");
    }

    #[test]
    fn test_validate_rejects_empty_reason() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());

        expense.reason = "   ".to_string();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyReason)
        );
    }

    #[test]
    fn test_id_parse_round_trip() {
        let id = ExpenseId::from_raw(1_700_000_000_000);
        let parsed: ExpenseId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serialization() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
        assert!(json.contains("\"Food & Drink\""));
        assert!(json.contains("\"2024-01-05\""));
    }

    #[test]
    fn test_category_defaults_when_missing() {
        let json = r#"{"id":7,"reason":"Misc","amount":100,"date":"2024-02-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Other);
    }
}
