//! Secondary location indexes
//!
//! Each index maps a field value to the identity keys of the contacts that
//! currently hold that value. Buckets keep insertion order so lookups are
//! deterministic.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;

use crate::models::{ContactKey, ContactRecord};

/// A location field that carries a secondary index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    City,
    State,
    Zip,
}

impl LocationField {
    /// All indexed fields, in search order
    pub const ALL: [LocationField; 3] = [Self::City, Self::State, Self::Zip];

    /// The contact's current value for this field
    pub fn value_of(self, contact: &ContactRecord) -> &str {
        match self {
            Self::City => &contact.city,
            Self::State => &contact.state,
            Self::Zip => &contact.zip_code,
        }
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
            Self::Zip => write!(f, "zip"),
        }
    }
}

/// Index over a single field: value -> keys holding that value
#[derive(Debug, Default, Clone)]
pub struct FieldIndex {
    buckets: HashMap<String, IndexSet<ContactKey>>,
}

impl FieldIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key under a value; returns false if it was already there
    pub fn insert(&mut self, value: &str, key: ContactKey) -> bool {
        self.buckets.entry(value.to_string()).or_default().insert(key)
    }

    /// Remove a key from a value's bucket
    ///
    /// Returns false if the key was not in the bucket. Empty buckets are dropped.
    pub fn remove(&mut self, value: &str, key: &ContactKey) -> bool {
        let Some(bucket) = self.buckets.get_mut(value) else {
            return false;
        };

        let removed = bucket.shift_remove(key);
        if bucket.is_empty() {
            self.buckets.remove(value);
        }
        removed
    }

    /// Keys currently stored under a value, in insertion order
    pub fn get(&self, value: &str) -> impl Iterator<Item = &ContactKey> {
        self.buckets.get(value).into_iter().flatten()
    }

    /// Check whether a key is stored under a value
    pub fn contains(&self, value: &str, key: &ContactKey) -> bool {
        self.buckets
            .get(value)
            .is_some_and(|bucket| bucket.contains(key))
    }

    /// Number of distinct values indexed
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of entries across all buckets
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(IndexSet::len).sum()
    }
}

/// City, state and zip indexes for one directory
#[derive(Debug, Default, Clone)]
pub struct LocationIndex {
    city: FieldIndex,
    state: FieldIndex,
    zip: FieldIndex,
}

impl LocationIndex {
    /// Create empty indexes
    pub fn new() -> Self {
        Self::default()
    }

    /// The index for one field
    pub fn field(&self, field: LocationField) -> &FieldIndex {
        match field {
            LocationField::City => &self.city,
            LocationField::State => &self.state,
            LocationField::Zip => &self.zip,
        }
    }

    fn field_mut(&mut self, field: LocationField) -> &mut FieldIndex {
        match field {
            LocationField::City => &mut self.city,
            LocationField::State => &mut self.state,
            LocationField::Zip => &mut self.zip,
        }
    }

    /// Index a contact under its current city, state and zip
    pub fn insert(&mut self, contact: &ContactRecord) {
        let key = contact.key();
        for field in LocationField::ALL {
            self.field_mut(field)
                .insert(field.value_of(contact), key.clone());
        }
    }

    /// Remove a contact from the buckets for its current values
    ///
    /// Missing entries are skipped. Returns true only if all three entries
    /// were present.
    pub fn remove(&mut self, contact: &ContactRecord) -> bool {
        let key = contact.key();
        let mut all_present = true;
        for field in LocationField::ALL {
            if !self.field_mut(field).remove(field.value_of(contact), &key) {
                tracing::warn!(
                    contact = %key,
                    field = %field,
                    "Index entry missing during removal"
                );
                all_present = false;
            }
        }
        all_present
    }

    /// Keys whose value for `field` equals `value`
    pub fn lookup(&self, field: LocationField, value: &str) -> impl Iterator<Item = &ContactKey> {
        self.field(field).get(value)
    }

    /// Check that a contact is indexed under all of its current values
    pub fn is_indexed(&self, contact: &ContactRecord) -> bool {
        let key = contact.key();
        LocationField::ALL
            .iter()
            .all(|&field| self.field(field).contains(field.value_of(contact), &key))
    }
}
