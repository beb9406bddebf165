//! CSV Export functionality
//!
//! Writes one row per contact across every book. The book name is not part
//! of the row.

use std::io::{Read, Write};

use crate::directory::DirectoryRegistry;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{ContactRecord, CONTACT_HEADERS};

/// Export all contacts to CSV
///
/// The header row is written even when there are no contacts.
pub fn export_csv<W: Write>(registry: &DirectoryRegistry, writer: W) -> AddressBookResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(CONTACT_HEADERS)
        .map_err(|e| AddressBookError::Export(e.to_string()))?;

    let mut rows = 0;
    for (_, book) in registry.iter() {
        for contact in book.all() {
            csv_writer
                .serialize(contact)
                .map_err(|e| AddressBookError::Export(e.to_string()))?;
            rows += 1;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| AddressBookError::Export(e.to_string()))?;

    Ok(rows)
}

/// Read contacts back from a CSV export
pub fn read_csv<R: Read>(reader: R) -> AddressBookResult<Vec<ContactRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(CONTACT_HEADERS) {
        return Err(AddressBookError::Csv(format!(
            "Unexpected header row: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    csv_reader
        .deserialize::<ContactRecord>()
        .map(|row| row.map_err(AddressBookError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> DirectoryRegistry {
        let mut registry = DirectoryRegistry::new();
        registry
            .create("Work")
            .unwrap()
            .add(
                ContactRecord::new("Jane", "Doe")
                    .with_address("12 MG Road, Camp")
                    .with_location("Pune", "MH", "411001")
                    .with_phone("9876543210")
                    .with_email("jane@example.com"),
            )
            .unwrap();
        registry
            .create("Family")
            .unwrap()
            .add(
                ContactRecord::new("Ravi", "Kumar")
                    .with_address("Flat \"B\" 4")
                    .with_location("Delhi", "DL", "110001"),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_export_csv() {
        let mut output = Vec::new();
        let rows = export_csv(&registry(), &mut output).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "First Name,Last Name,Address,City,State,Zip Code,Phone,Email"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Jane,Doe,\"12 MG Road, Camp\",Pune,MH,411001,9876543210,jane@example.com"
        );
        assert!(lines.next().unwrap().starts_with("Ravi,Kumar,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut output = Vec::new();
        export_csv(&DirectoryRegistry::new(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "First Name,Last Name,Address,City,State,Zip Code,Phone,Email\n"
        );
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let registry = registry();
        let mut output = Vec::new();
        export_csv(&registry, &mut output).unwrap();

        let contacts = read_csv(output.as_slice()).unwrap();
        let original: Vec<_> = registry.iter().flat_map(|(_, b)| b.all()).collect();
        assert_eq!(contacts.len(), original.len());
        for (read, orig) in contacts.iter().zip(original) {
            assert_eq!(read.fields(), orig.fields());
        }
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        let err = read_csv("Name,Phone\nJane,123\n".as_bytes()).unwrap_err();
        assert!(matches!(err, AddressBookError::Csv(_)));
    }
}
