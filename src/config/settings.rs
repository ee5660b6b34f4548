//! User settings for outlay
//!
//! Budget threshold, theme choice, and the reminder flag are process-wide
//! state with explicit load/save calls; nothing writes settings implicitly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::OutlayPaths;
use crate::error::OutlayError;
use crate::models::Money;

/// Color theme preference for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light terminal backgrounds
    #[default]
    Light,
    /// Dark terminal backgrounds
    Dark,
}

/// User settings for outlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly budget threshold; zero disables budget tracking
    #[serde(default)]
    pub budget: Money,

    /// Preferred terminal theme
    #[serde(default)]
    pub theme: Theme,

    /// Whether the daily logging reminder is enabled
    #[serde(default)]
    pub reminder_enabled: bool,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget: Money::zero(),
            theme: Theme::default(),
            reminder_enabled: false,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults
    ///
    /// A missing file is the normal first-run case. A corrupt file is
    /// recovered by resetting to defaults; the next save overwrites it.
    pub fn load_or_create(paths: &OutlayPaths) -> Result<Self, OutlayError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| OutlayError::Io(format!("Failed to read settings file: {}", e)))?;

        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "settings file is corrupt, falling back to defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OutlayPaths) -> Result<(), OutlayError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OutlayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| OutlayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.budget.is_zero());
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.reminder_enabled);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.budget = Money::from_cents(50_000);
        settings.theme = Theme::Dark;
        settings.reminder_enabled = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget.cents(), 50_000);
        assert_eq!(loaded.theme, Theme::Dark);
        assert!(loaded.reminder_enabled);
    }

    #[test]
    fn test_corrupt_settings_reset_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), "{not valid json").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.budget.is_zero());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 1);
    }
}
