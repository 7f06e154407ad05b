//! User settings for CediTrack
//!
//! Display preferences: currency symbol and date format. Settings are stored
//! as JSON next to the account snapshot and created with defaults on first
//! use.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerResult;

fn default_currency() -> String {
    "GHS".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// User settings for CediTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create the file with defaults
    pub fn load_or_create(paths: &TrackerPaths) -> TrackerResult<Self> {
        let path = paths.settings_file();

        if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            let settings: Settings = serde_json::from_str(&json)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, serde_json::to_string_pretty(&settings)?)?;
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "GHS");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_or_create_roundtrip() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());

        // First call creates the file with defaults
        let created = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(created.currency_symbol, "GHS");

        // Second call reads it back
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, created.currency_symbol);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.currency_symbol, "GHS");
    }
}
