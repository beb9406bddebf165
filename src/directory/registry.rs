//! Registry of named address books

use indexmap::IndexMap;
use tracing::{info, warn};

use super::Directory;
use crate::error::{AddressBookError, AddressBookResult};

/// All address books of a session, keyed by exact name
#[derive(Debug, Default)]
pub struct DirectoryRegistry {
    books: IndexMap<String, Directory>,
}

impl DirectoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty address book
    ///
    /// The name is stored exactly as given; uniqueness is an exact string
    /// match.
    pub fn create(&mut self, name: &str) -> AddressBookResult<&mut Directory> {
        if name.trim().is_empty() {
            return Err(AddressBookError::InvalidInput(
                "Address book name cannot be empty".into(),
            ));
        }

        if self.books.contains_key(name) {
            warn!(book = name, "Address book already exists");
            return Err(AddressBookError::duplicate_book(name));
        }

        info!(book = name, "Address book created");
        let entry = self.books.entry(name.to_string());
        Ok(entry.or_insert_with(|| Directory::new(name)))
    }

    /// Look up a book by name
    pub fn get(&self, name: &str) -> AddressBookResult<&Directory> {
        self.books
            .get(name)
            .ok_or_else(|| AddressBookError::book_not_found(name))
    }

    /// Look up a book by name for mutation
    pub fn get_mut(&mut self, name: &str) -> AddressBookResult<&mut Directory> {
        self.books
            .get_mut(name)
            .ok_or_else(|| AddressBookError::book_not_found(name))
    }

    /// Book names in creation order
    pub fn list_names(&self) -> Vec<&str> {
        self.books.keys().map(String::as_str).collect()
    }

    /// Books with their names, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Directory)> {
        self.books.iter().map(|(name, book)| (name.as_str(), book))
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check whether no books exist
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Contacts across all books
    pub fn total_contacts(&self) -> usize {
        self.books.values().map(Directory::len).sum()
    }
}
