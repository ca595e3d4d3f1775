//! Path management for duit
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `DUIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/duit` or `~/.config/duit`
//! 3. Windows: `%APPDATA%\duit`

use std::path::PathBuf;

use crate::error::DuitError;

/// Manages all paths used by duit
#[derive(Debug, Clone)]
pub struct DuitPaths {
    /// Base directory for all duit data
    base_dir: PathBuf,
}

impl DuitPaths {
    /// Create a new DuitPaths instance
    ///
    /// Path resolution:
    /// 1. `DUIT_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/duit` or `~/.config/duit`
    /// 3. Windows: `%APPDATA%\duit`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DuitError> {
        let base_dir = if let Ok(custom) = std::env::var("DUIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DuitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/duit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/duit/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the per-month ledger file
    pub fn per_month_file(&self) -> PathBuf {
        self.data_dir().join("per_month.json")
    }

    /// Get the path to the monthly items file
    pub fn monthly_file(&self) -> PathBuf {
        self.data_dir().join("monthly.json")
    }

    /// Get the path to the per-month toggle map file
    pub fn monthly_toggles_file(&self) -> PathBuf {
        self.data_dir().join("monthly_toggles.json")
    }

    /// Get the path to the legacy single-collection file
    ///
    /// Read once during migration, never written.
    pub fn legacy_file(&self) -> PathBuf {
        self.data_dir().join("money.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DuitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DuitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DuitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DuitError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("duit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DuitError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DuitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("duit"))
}
