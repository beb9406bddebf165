//! Core data models for the address book

pub mod contact;

pub use contact::{ContactKey, ContactRecord, ContactUpdate, CONTACT_HEADERS};
