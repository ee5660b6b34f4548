//! Service layer for outlay
//!
//! Business logic on top of the storage layer; currently the import
//! pipeline (parsing, normalization, appending).

pub mod import;

pub use import::{import_str, ImportFormat, ImportResult};
