//! Path management for CediTrack
//!
//! Provides path resolution for configuration and the account directory
//! snapshot.
//!
//! ## Path Resolution Order
//!
//! 1. `CEDITRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ceditrack` or `~/.config/ceditrack`
//! 3. Windows: `%APPDATA%\ceditrack`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TrackerError;

/// Manages all paths used by CediTrack
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all CediTrack data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var("CEDITRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ceditrack/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the account directory snapshot
    pub fn accounts_file(&self) -> PathBuf {
        self.base_dir.join("accounts.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| TrackerError::Config("Cannot determine home directory".into()))?;
    Ok(base_dirs.config_dir().join("ceditrack"))
}
