//! outlay - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the outlay expense
//! tracking application: recording expenses, deriving reports and spending
//! tips from them, and moving data in and out through JSON, CSV,
//! spreadsheet, and printable report formats.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money)
//! - `storage`: JSON file storage layer
//! - `reports`: Pure derived views (filters, totals, insights)
//! - `services`: Import pipeline
//! - `export`: Multi-format export with injected writer capabilities
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::config::{paths::OutlayPaths, settings::Settings};
//! use outlay::storage::Storage;
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::OutlayError;
