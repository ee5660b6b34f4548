//! Expense repository for JSON storage
//!
//! The record store: an ordered collection of expenses persisted as one
//! JSON file. Every mutation writes the whole collection back; there is
//! no incremental diffing at personal-dataset scale.

use std::path::PathBuf;

use crate::error::OutlayError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
///
/// Owns the canonical ordered list. Callers get snapshots; derived views
/// never mutate in place.
pub struct ExpenseRepository {
    path: PathBuf,
    data: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Load expenses from disk
    ///
    /// Fails soft: a missing or corrupt file yields an empty collection.
    pub fn load(&mut self) -> Result<(), OutlayError> {
        let file_data: ExpenseData = read_json_or_default(&self.path)?;
        self.data = file_data.expenses;
        Ok(())
    }

    /// Save the full collection to disk
    pub fn save(&self) -> Result<(), OutlayError> {
        let file_data = ExpenseData {
            expenses: self.data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append an expense and persist
    ///
    /// Id uniqueness is not enforced here; the generation strategy keeps
    /// collisions unlikely for a single user.
    pub fn add(&mut self, expense: Expense) -> Result<(), OutlayError> {
        self.data.push(expense);
        self.save()
    }

    /// Append many expenses in order and persist once
    pub fn add_all(&mut self, expenses: Vec<Expense>) -> Result<(), OutlayError> {
        self.data.extend(expenses);
        self.save()
    }

    /// Remove the expense with the exact id and persist
    ///
    /// Idempotent: removing a nonexistent id is a no-op and returns false.
    pub fn remove(&mut self, id: ExpenseId) -> Result<bool, OutlayError> {
        let before = self.data.len();
        self.data.retain(|e| e.id != id);
        let removed = self.data.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Read-only snapshot of the ordered collection
    pub fn all(&self) -> &[Expense] {
        &self.data
    }

    /// Find an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.data.iter().find(|e| e.id == id)
    }

    /// Count expenses
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
