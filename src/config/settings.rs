//! User settings for the address book
//!
//! Manages logging verbosity and export preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::AddressBookPaths;
use crate::error::AddressBookError;
use crate::export::ExportFormat;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Log filter used when `RUST_LOG` is not set (e.g. "info", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Indent JSON exports
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// File name for CSV exports, relative to the export directory
    #[serde(default = "default_csv_file_name")]
    pub csv_file_name: String,

    /// File name for JSON exports
    #[serde(default = "default_json_file_name")]
    pub json_file_name: String,

    /// File name for YAML exports
    #[serde(default = "default_yaml_file_name")]
    pub yaml_file_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty_json() -> bool {
    true
}

fn default_csv_file_name() -> String {
    format!("contacts.{}", ExportFormat::Csv.extension())
}

fn default_json_file_name() -> String {
    format!("contacts.{}", ExportFormat::Json.extension())
}

fn default_yaml_file_name() -> String {
    format!("contacts.{}", ExportFormat::Yaml.extension())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            pretty_json: default_pretty_json(),
            csv_file_name: default_csv_file_name(),
            json_file_name: default_json_file_name(),
            yaml_file_name: default_yaml_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AddressBookPaths) -> Result<Self, AddressBookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AddressBookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AddressBookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AddressBookPaths) -> Result<(), AddressBookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AddressBookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AddressBookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Full path an export of the given format is written to
    pub fn export_path(&self, paths: &AddressBookPaths, format: ExportFormat) -> PathBuf {
        let file_name = match format {
            ExportFormat::Csv => &self.csv_file_name,
            ExportFormat::Json => &self.json_file_name,
            ExportFormat::Yaml => &self.yaml_file_name,
        };
        paths.export_dir().join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "info");
        assert!(settings.pretty_json);
        assert_eq!(settings.csv_file_name, "contacts.csv");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.log_level = "debug".to_string();
        settings.pretty_json = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert!(!loaded.pretty_json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.yaml_file_name, "contacts.yaml");
    }

    #[test]
    fn test_export_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        assert_eq!(
            settings.export_path(&paths, ExportFormat::Json),
            temp_dir.path().join("exports").join("contacts.json")
        );
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AddressBookError::Config(_)));
    }
}
