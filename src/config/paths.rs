//! Path management for the user admin application
//!
//! ## Path Resolution Order
//!
//! 1. `USER_ADMIN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/user-admin` or `~/.config/user-admin`
//! 3. Windows: `%APPDATA%\user-admin`

use std::path::PathBuf;

use crate::error::AdminError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "USER_ADMIN_DATA_DIR";

/// Manages all paths used by the application
#[derive(Debug, Clone)]
pub struct AdminPaths {
    base_dir: PathBuf,
}

impl AdminPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, AdminError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AdminPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    pub fn audit_entries_file(&self) -> PathBuf {
        self.data_dir().join("audit_entries.json")
    }

    pub fn audit_snapshots_file(&self) -> PathBuf {
        self.data_dir().join("audit_snapshots.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AdminError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AdminError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AdminError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AdminError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AdminError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("user-admin"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AdminError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AdminError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("user-admin"))
}
