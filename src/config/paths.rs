//! Path management for perdiem
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `PERDIEM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/perdiem` or `~/.config/perdiem`
//! 3. Windows: `%APPDATA%\perdiem`

use std::path::PathBuf;

use crate::error::PerdiemError;

/// Manages all paths used by perdiem
#[derive(Debug, Clone)]
pub struct PerdiemPaths {
    /// Base directory for all perdiem data
    base_dir: PathBuf,
}

impl PerdiemPaths {
    /// Create a new PerdiemPaths instance
    ///
    /// Path resolution:
    /// 1. `PERDIEM_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/perdiem` or `~/.config/perdiem`
    /// 3. Windows: `%APPDATA%\perdiem`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PerdiemError> {
        let base_dir = if let Ok(custom) = std::env::var("PERDIEM_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PerdiemPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/perdiem/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/perdiem/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budget.json, the whole-state snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/perdiem/)
    /// - Data directory (~/.config/perdiem/data/)
    pub fn ensure_directories(&self) -> Result<(), PerdiemError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PerdiemError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PerdiemError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PerdiemError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(custom) => PathBuf::from(custom),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| PerdiemError::config("Could not determine home directory"))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("perdiem"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PerdiemError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PerdiemError::config("Could not determine APPDATA directory"))?;
    Ok(PathBuf::from(appdata).join("perdiem"))
}
