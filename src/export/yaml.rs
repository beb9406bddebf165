//! YAML Export functionality
//!
//! Same shape as the JSON export, with a comment header.

use std::io::Write;

use chrono::Local;

use super::json::collect_books;
use crate::directory::DirectoryRegistry;
use crate::error::{AddressBookError, AddressBookResult};

/// Export all books to YAML
pub fn export_yaml<W: Write>(registry: &DirectoryRegistry, writer: &mut W) -> AddressBookResult<()> {
    let books = collect_books(registry);

    writeln!(writer, "# Address Book Export")
        .map_err(|e| AddressBookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))
        .map_err(|e| AddressBookError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Books: {}, Contacts: {}",
        registry.len(),
        registry.total_contacts()
    )
    .map_err(|e| AddressBookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AddressBookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &books).map_err(|e| AddressBookError::Export(e.to_string()))?;

    Ok(())
}
