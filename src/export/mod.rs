//! Export module for the address book
//!
//! Provides one-shot export of every book in the registry:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: contacts grouped by book name
//! - YAML: same shape as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{error, info};

use crate::directory::DirectoryRegistry;
use crate::error::{AddressBookError, AddressBookResult};

pub use self::csv::{export_csv, read_csv};
pub use self::json::{export_json, read_json, BookExport, ParsedExport};
pub use self::yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Export every book to `path` in the given format
///
/// The file is closed when this returns, whether or not the write succeeded.
pub fn export_to_file(
    registry: &DirectoryRegistry,
    path: &Path,
    format: ExportFormat,
    pretty: bool,
) -> AddressBookResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AddressBookError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        AddressBookError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let result = match format {
        ExportFormat::Csv => export_csv(registry, &mut writer).map(|_| ()),
        ExportFormat::Json => export_json(registry, &mut writer, pretty),
        ExportFormat::Yaml => export_yaml(registry, &mut writer),
    }
    .and_then(|()| {
        writer
            .flush()
            .map_err(|e| AddressBookError::Export(e.to_string()))
    });

    match &result {
        Ok(()) => info!(
            format = %format,
            path = %path.display(),
            books = registry.len(),
            contacts = registry.total_contacts(),
            "Export written"
        ),
        Err(e) => error!(format = %format, path = %path.display(), error = %e, "Export failed"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactRecord;
    use tempfile::TempDir;

    fn registry() -> DirectoryRegistry {
        let mut registry = DirectoryRegistry::new();
        registry
            .create("Work")
            .unwrap()
            .add(ContactRecord::new("Jane", "Doe").with_location("Pune", "MH", "411001"))
            .unwrap();
        registry
    }

    #[test]
    fn test_export_to_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("contacts.csv");

        export_to_file(&registry(), &path, ExportFormat::Csv, false).unwrap();

        let contacts = read_csv(File::open(&path).unwrap()).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].city, "Pune");
    }

    #[test]
    fn test_export_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.json");

        export_to_file(&registry(), &path, ExportFormat::Json, true).unwrap();

        let parsed = read_json(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed["Work"][0].first_name, "Jane");
    }

    #[test]
    fn test_export_to_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a file
        let err = export_to_file(&registry(), temp_dir.path(), ExportFormat::Yaml, false)
            .unwrap_err();
        assert!(matches!(err, AddressBookError::Export(_)));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Yaml.to_string(), "YAML");
    }
}
