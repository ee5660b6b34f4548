//! Configuration module for outlay
//!
//! This module provides configuration management including:
//! - Data directory resolution with an env-var override
//! - User settings persistence (budget, theme, reminder)

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::{Settings, Theme};
