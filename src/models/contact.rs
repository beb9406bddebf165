//! Contact model
//!
//! A contact is identified by its first and last name. The remaining fields
//! are free text and are never validated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a contact within one address book
///
/// Case-sensitive, exact match on both names. Orders by first name, then
/// last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactKey {
    pub first_name: String,
    pub last_name: String,
}

impl ContactKey {
    /// Create a key from a first and last name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A single address book entry
///
/// Serialized field names double as the CSV export header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Zip Code")]
    pub zip_code: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Email")]
    pub email: String,
}

/// Column headers in export order
pub const CONTACT_HEADERS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Address",
    "City",
    "State",
    "Zip Code",
    "Phone",
    "Email",
];

impl ContactRecord {
    /// Create a contact with only a name; other fields start empty
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Set the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set city, state and zip code together
    pub fn with_location(
        mut self,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.state = state.into();
        self.zip_code = zip_code.into();
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// The identity key of this contact
    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.first_name.clone(), self.last_name.clone())
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Field values in export header order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip_code.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Contacts compare by identity only
impl PartialEq for ContactRecord {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Eq for ContactRecord {}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}, {}, {}, {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip_code,
            self.phone,
            self.email
        )
    }
}

/// Partial update for an existing contact
///
/// `None` keeps the current value. Names are not editable; they form the
/// contact's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Build an update from raw console answers, where a blank answer means
    /// "keep the current value"
    pub fn from_inputs(
        address: &str,
        city: &str,
        state: &str,
        zip_code: &str,
        phone: &str,
        email: &str,
    ) -> Self {
        Self {
            address: non_blank(address),
            city: non_blank(city),
            state: non_blank(state),
            zip_code: non_blank(zip_code),
            phone: non_blank(phone),
            email: non_blank(email),
        }
    }

    /// Check whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether the update touches an indexed location field
    pub fn touches_location(&self) -> bool {
        self.city.is_some() || self.state.is_some() || self.zip_code.is_some()
    }

    /// Apply the update to a contact in place
    pub fn apply_to(&self, contact: &mut ContactRecord) {
        let fields = [
            (&self.address, &mut contact.address),
            (&self.city, &mut contact.city),
            (&self.state, &mut contact.state),
            (&self.zip_code, &mut contact.zip_code),
            (&self.phone, &mut contact.phone),
            (&self.email, &mut contact.email),
        ];

        for (new_value, slot) in fields {
            if let Some(value) = new_value {
                slot.clone_from(value);
            }
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
