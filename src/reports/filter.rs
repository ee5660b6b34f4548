//! Filtered and sorted views of the expense collection
//!
//! Pure functions: the store's snapshot goes in, a fresh ordered vec comes
//! out. Recomputed on every call; nothing here caches.

use clap::ValueEnum;
use chrono::NaiveDate;

use crate::models::{Category, Expense};

/// Category selection for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// All categories
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category == *category,
        }
    }
}

/// Sort order for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortKey {
    /// Most recent date first
    #[default]
    Newest,
    /// Oldest date first
    Oldest,
    /// Largest amount first
    AmountHigh,
    /// Smallest amount first
    AmountLow,
}

/// A complete view specification
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: CategoryFilter,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
    pub sort: SortKey,
}

/// Produce a filtered, sorted copy of the snapshot
pub fn filter_and_sort(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let mut view: Vec<Expense> = expenses
        .iter()
        .filter(|e| filter.category.matches(e))
        .filter(|e| filter.from.map_or(true, |from| e.date >= from))
        .filter(|e| filter.to.map_or(true, |to| e.date <= to))
        .cloned()
        .collect();

    match filter.sort {
        SortKey::Newest => view.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id))),
        SortKey::Oldest => view.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id))),
        SortKey::AmountHigh => view.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::AmountLow => view.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }

    view
}
