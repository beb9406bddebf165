//! JSON Export functionality
//!
//! Exports every book as an object keyed by book name. Each value is the
//! book's contacts, using the CSV header names as field names.

use std::io::{Read, Write};

use indexmap::IndexMap;

use crate::directory::DirectoryRegistry;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::ContactRecord;

/// Contacts grouped by book name, in registry order
pub type BookExport<'a> = IndexMap<&'a str, Vec<&'a ContactRecord>>;

/// Owned form of [`BookExport`], as read back from a file
pub type ParsedExport = IndexMap<String, Vec<ContactRecord>>;

/// Group every book's contacts for serialization
pub fn collect_books(registry: &DirectoryRegistry) -> BookExport<'_> {
    registry
        .iter()
        .map(|(name, book)| (name, book.all().collect::<Vec<_>>()))
        .collect()
}

/// Export all books to JSON
pub fn export_json<W: Write>(
    registry: &DirectoryRegistry,
    writer: &mut W,
    pretty: bool,
) -> AddressBookResult<()> {
    let books = collect_books(registry);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &books)
    } else {
        serde_json::to_writer(&mut *writer, &books)
    };
    written.map_err(|e| AddressBookError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| AddressBookError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back (for verification)
pub fn read_json<R: Read>(reader: R) -> AddressBookResult<ParsedExport> {
    Ok(serde_json::from_reader(reader)?)
}
