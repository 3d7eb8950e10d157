//! User settings for the user admin application
//!
//! Persisted as `config.json` in the base directory.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::AdminPaths;
use crate::error::AdminError;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default tracing filter when `USER_ADMIN_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether `init` seeds the demo users into an empty store
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_seed_demo_users() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            log_level: default_log_level(),
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &AdminPaths) -> Result<Self, AdminError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved until the caller decides to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AdminError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| AdminError::Config(format!("Failed to parse settings file: {}", e)))?;

        check_date_format(&settings.date_format)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AdminPaths) -> Result<(), AdminError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AdminError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AdminError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Reject strftime patterns chrono cannot render
fn check_date_format(date_format: &str) -> Result<(), AdminError> {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(AdminError::Config(format!(
            "Invalid date_format '{}' in settings file",
            date_format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.log_level, "warn");
        assert!(settings.seed_demo_users);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            date_format: "%Y-%m-%d".to_string(),
            seed_demo_users: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert!(settings.seed_demo_users);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(AdminError::Config(_))));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(AdminError::Config(msg)) if msg.contains("%Q")));
    }

    #[test]
    fn test_check_date_format() {
        assert!(check_date_format("%d/%m/%Y").is_ok());
        assert!(check_date_format("%Y-%m-%d").is_ok());
        assert!(check_date_format("%Q").is_err());
    }
}
