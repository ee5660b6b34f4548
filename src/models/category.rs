//! Expense categories
//!
//! The category set is a closed enumeration; anything a user or an import
//! file supplies that is not recognized lands in `Other`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
pub enum Category {
    /// Groceries, restaurants, coffee
    #[serde(rename = "Food & Drink")]
    #[value(name = "food")]
    FoodAndDrink,
    /// Retail purchases
    #[serde(rename = "Shopping")]
    #[value(name = "shopping")]
    Shopping,
    /// Transit, fuel, ride shares
    #[serde(rename = "Transportation")]
    #[value(name = "transport")]
    Transportation,
    /// Rent, utilities, subscriptions
    #[serde(rename = "Bills")]
    #[value(name = "bills")]
    Bills,
    /// Movies, games, going out
    #[serde(rename = "Entertainment")]
    #[value(name = "entertainment")]
    Entertainment,
    /// Everything else
    #[default]
    #[serde(rename = "Other")]
    #[value(name = "other")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Self::FoodAndDrink,
        Self::Shopping,
        Self::Transportation,
        Self::Bills,
        Self::Entertainment,
        Self::Other,
    ];

    /// The display label, matching the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food & Drink",
            Self::Shopping => "Shopping",
            Self::Transportation => "Transportation",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Display icon for terminal output
    pub fn icon(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "🍔",
            Self::Shopping => "🛍",
            Self::Transportation => "🚌",
            Self::Bills => "🧾",
            Self::Entertainment => "🎬",
            Self::Other => "📦",
        }
    }

    /// Lenient lookup used by the importer: unrecognized labels become `Other`.
    ///
    /// Matching is case-insensitive on the display label.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
