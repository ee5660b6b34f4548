//! Storage layer for outlay
//!
//! Provides JSON file storage with atomic writes and fail-soft loading.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or_default, write_json_atomic};

use crate::config::paths::OutlayPaths;
use crate::error::OutlayError;

/// Main storage coordinator
pub struct Storage {
    paths: OutlayPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: OutlayPaths) -> Result<Self, OutlayError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OutlayPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), OutlayError> {
        self.expenses.load()?;
        Ok(())
    }
}
