//! Address book storage and lookup
//!
//! A [`Directory`] is one named address book. It owns its contacts in a
//! primary map keyed by identity and keeps city, state and zip indexes in
//! step with every add, edit and delete.
//!
//! A [`DirectoryRegistry`] holds all books of a session, and the query
//! helpers in [`query`] search and sort over them.

pub mod index;
pub mod query;
pub mod registry;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{ContactKey, ContactRecord, ContactUpdate};

pub use index::{FieldIndex, LocationField, LocationIndex};
pub use query::{
    find_by_location, BookHit, CategoryCounts, LocationMatches, LocationSearch, SortKey,
};
pub use registry::DirectoryRegistry;

/// One named address book
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    contacts: IndexMap<ContactKey, ContactRecord>,
    locations: LocationIndex,
}

impl Directory {
    /// Create an empty address book
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: IndexMap::new(),
            locations: LocationIndex::new(),
        }
    }

    /// Name of this address book
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a contact
    ///
    /// Fails with `Duplicate` if a contact with the same first and last name
    /// exists; the directory is left unchanged.
    pub fn add(&mut self, contact: ContactRecord) -> AddressBookResult<()> {
        let key = contact.key();
        if self.contains(&key) {
            warn!(book = %self.name, contact = %key, "Contact already exists in the address book");
            return Err(AddressBookError::duplicate_contact(key.to_string()));
        }

        self.locations.insert(&contact);
        self.contacts.insert(key.clone(), contact);

        info!(book = %self.name, contact = %key, "Contact added");
        tracing::debug!(
            book = %self.name,
            contacts = ?self.contacts.keys().map(ToString::to_string).collect::<Vec<_>>(),
            "Current contacts"
        );
        Ok(())
    }

    /// Apply a partial update to an existing contact
    ///
    /// Location indexes are moved from the old values to the new ones before
    /// the stored record is replaced.
    pub fn edit(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> AddressBookResult<&ContactRecord> {
        let key = ContactKey::new(first_name, last_name);
        let Some(slot) = self.contacts.get_mut(&key) else {
            warn!(book = %self.name, contact = %key, "Contact not found for edit");
            return Err(AddressBookError::contact_not_found(key.to_string()));
        };

        let mut updated = slot.clone();
        update.apply_to(&mut updated);

        if update.touches_location() {
            self.locations.remove(slot);
            self.locations.insert(&updated);
        }
        *slot = updated;

        info!(book = %self.name, contact = %key, "Contact updated");
        Ok(slot)
    }

    /// Remove a contact by name, returning it
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> AddressBookResult<ContactRecord> {
        let key = ContactKey::new(first_name, last_name);
        let Some(contact) = self.contacts.shift_remove(&key) else {
            warn!(book = %self.name, contact = %key, "Contact not found for delete");
            return Err(AddressBookError::contact_not_found(key.to_string()));
        };

        self.locations.remove(&contact);

        info!(book = %self.name, contact = %key, "Contact deleted");
        Ok(contact)
    }

    /// Look up a contact by name
    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&ContactRecord> {
        self.contacts.get(&ContactKey::new(first_name, last_name))
    }

    /// Look up a contact by identity key
    pub fn get_by_key(&self, key: &ContactKey) -> Option<&ContactRecord> {
        self.contacts.get(key)
    }

    /// Check whether a contact with this identity exists
    pub fn contains(&self, key: &ContactKey) -> bool {
        self.contacts.contains_key(key)
    }

    /// All contacts in insertion order
    pub fn all(&self) -> impl Iterator<Item = &ContactRecord> {
        self.contacts.values()
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub(crate) fn locations(&self) -> &LocationIndex {
        &self.locations
    }
}
