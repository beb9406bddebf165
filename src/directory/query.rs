//! Search and sort over address books
//!
//! Location searches go through the secondary indexes rather than scanning
//! every contact. Sorting returns a view and never reorders storage.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::info;

use super::index::LocationField;
use super::registry::DirectoryRegistry;
use super::Directory;
use crate::error::AddressBookError;
use crate::models::{ContactKey, ContactRecord};

/// Field to sort contacts by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// First name, then last name
    Name,
    City,
    State,
    Zip,
}

impl SortKey {
    fn compare(self, a: &ContactRecord, b: &ContactRecord) -> Ordering {
        let primary = match self {
            Self::Name => Ordering::Equal,
            Self::City => a.city.cmp(&b.city),
            Self::State => a.state.cmp(&b.state),
            Self::Zip => a.zip_code.cmp(&b.zip_code),
        };

        primary
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.last_name.cmp(&b.last_name))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
            Self::Zip => write!(f, "zip"),
        }
    }
}

impl FromStr for SortKey {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" | "zipcode" | "zip_code" => Ok(Self::Zip),
            other => Err(AddressBookError::InvalidInput(format!(
                "Unknown sort key '{}'",
                other
            ))),
        }
    }
}

/// Per-category matches for a location token within one book
#[derive(Debug, Default)]
pub struct LocationMatches<'a> {
    pub city: Vec<&'a ContactRecord>,
    pub state: Vec<&'a ContactRecord>,
    pub zip: Vec<&'a ContactRecord>,
}

impl<'a> LocationMatches<'a> {
    /// City, state and zip matches combined, each contact listed once at
    /// its first matching category
    pub fn combined(&self) -> Vec<&'a ContactRecord> {
        let mut seen: HashSet<ContactKey> = HashSet::new();
        self.city
            .iter()
            .chain(&self.state)
            .chain(&self.zip)
            .filter(|contact| seen.insert(contact.key()))
            .copied()
            .collect()
    }

    /// Check whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.zip.is_empty()
    }
}

impl Directory {
    /// Contacts whose city, state or zip equals `token`, split by category
    pub fn location_matches(&self, token: &str) -> LocationMatches<'_> {
        LocationMatches {
            city: self.lookup(LocationField::City, token),
            state: self.lookup(LocationField::State, token),
            zip: self.lookup(LocationField::Zip, token),
        }
    }

    fn lookup(&self, field: LocationField, token: &str) -> Vec<&ContactRecord> {
        self.locations()
            .lookup(field, token)
            .filter_map(|key| self.get_by_key(key))
            .collect()
    }

    /// Contacts whose city, state or zip equals `token`
    ///
    /// A contact matching several categories is returned once.
    pub fn search_by(&self, token: &str) -> Vec<&ContactRecord> {
        self.location_matches(token).combined()
    }

    /// All contacts ordered by `key`, ties broken by name
    pub fn sorted(&self, key: SortKey) -> Vec<&ContactRecord> {
        let mut contacts: Vec<_> = self.all().collect();
        contacts.sort_by(|a, b| key.compare(a, b));
        contacts
    }
}

/// A search hit tagged with the book it came from
#[derive(Debug, Clone, Copy)]
pub struct BookHit<'a> {
    pub book: &'a str,
    pub contact: &'a ContactRecord,
}

/// Number of matches per category
///
/// Categories are counted independently; a contact matching both city and
/// state counts once in each.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub city: usize,
    pub state: usize,
    pub zip: usize,
}

impl CategoryCounts {
    /// Count for one category
    pub fn get(&self, field: LocationField) -> usize {
        match field {
            LocationField::City => self.city,
            LocationField::State => self.state,
            LocationField::Zip => self.zip,
        }
    }
}

/// Result of a location search across every book
#[derive(Debug, Default)]
pub struct LocationSearch<'a> {
    pub token: String,
    pub hits: Vec<BookHit<'a>>,
    pub counts: CategoryCounts,
}

impl LocationSearch<'_> {
    /// Check whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Search every book for contacts whose city, state or zip equals `token`
///
/// Hits are in registry order, deduplicated within each book.
pub fn find_by_location<'a>(registry: &'a DirectoryRegistry, token: &str) -> LocationSearch<'a> {
    let mut search = LocationSearch {
        token: token.to_string(),
        ..Default::default()
    };

    for (name, directory) in registry.iter() {
        let matches = directory.location_matches(token);
        search.counts.city += matches.city.len();
        search.counts.state += matches.state.len();
        search.counts.zip += matches.zip.len();

        search.hits.extend(
            matches
                .combined()
                .into_iter()
                .map(|contact| BookHit { book: name, contact }),
        );
    }

    info!(
        token,
        hits = search.hits.len(),
        city = search.counts.city,
        state = search.counts.state,
        zip = search.counts.zip,
        "Location search completed"
    );
    search
}
