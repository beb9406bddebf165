//! Custom error types for the address book
//!
//! Every failure in the core is recoverable: the menu loop reports the error
//! and keeps running.

use thiserror::Error;

/// The main error type for address book operations
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Malformed user input (menu choice, bulk-add count, blank name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The console input stream reached end of file
    #[error("Input stream closed")]
    InputClosed,
}

impl AddressBookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for address books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Address book",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate-identity error for contacts
    pub fn duplicate_contact(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate-name error for address books
    pub fn duplicate_book(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Address book",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for AddressBookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AddressBookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for AddressBookError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_yaml::Error> for AddressBookError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for address book operations
pub type AddressBookResult<T> = Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = AddressBookError::contact_not_found("Jane Doe");
        assert_eq!(err.to_string(), "Contact not found: Jane Doe");
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_duplicate_book_error() {
        let err = AddressBookError::duplicate_book("Work");
        assert_eq!(err.to_string(), "Address book already exists: Work");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_invalid_input_error() {
        let err = AddressBookError::InvalidInput("'abc' is not a number".into());
        assert_eq!(err.to_string(), "Invalid input: 'abc' is not a number");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AddressBookError = io_err.into();
        assert!(matches!(err, AddressBookError::Io(_)));
    }
}
