//! Where settings, logs and exports are kept
//!
//! `ADDRESSBOOK_DATA_DIR` wins; otherwise an `addressbook` folder in the
//! per-user config directory is used.

use std::path::PathBuf;

use crate::error::AddressBookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ADDRESSBOOK_DATA_DIR";

/// Manages all paths used by the address book
#[derive(Debug, Clone)]
pub struct AddressBookPaths {
    /// Base directory for settings, logs and exports
    base_dir: PathBuf,
}

impl AddressBookPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns a config error when neither the override nor a per-user
    /// config directory is available.
    pub fn new() -> Result<Self, AddressBookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => user_config_dir()
                .map(|dir| dir.join("addressbook"))
                .ok_or_else(|| {
                    AddressBookError::Config(format!(
                        "No config directory found; set {} or pass --data-dir",
                        DATA_DIR_ENV
                    ))
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use `base_dir` as is
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Append-only activity log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("addressbook.log")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Create the base and export directories
    pub fn ensure_directories(&self) -> Result<(), AddressBookError> {
        for dir in [self.base_dir.clone(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                AddressBookError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// `%APPDATA%` on Windows, otherwise `$XDG_CONFIG_HOME` or `~/.config`
fn user_config_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        return std::env::var_os("APPDATA").map(PathBuf::from);
    }
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}
