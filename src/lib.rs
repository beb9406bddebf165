//! AddressBook - Terminal-based contact manager
//!
//! This library provides the core functionality for the `addressbook` binary:
//! named address books holding contact records, indexed by city, state and
//! ZIP code for fast location lookup, with CSV/JSON/YAML export.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Contact records and identity keys
//! - `directory`: Address books, their location indexes, the registry and
//!   search/sort helpers
//! - `export`: One-shot file export
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu controller
//! - `logging`: Console and file logging setup
//!
//! # Example
//!
//! ```rust
//! use addressbook::directory::{DirectoryRegistry, SortKey};
//! use addressbook::models::ContactRecord;
//!
//! let mut registry = DirectoryRegistry::new();
//! let work = registry.create("Work")?;
//! work.add(ContactRecord::new("Jane", "Doe").with_location("Pune", "MH", "411001"))?;
//!
//! assert_eq!(work.search_by("Pune").len(), 1);
//! assert_eq!(work.sorted(SortKey::Name)[0].first_name, "Jane");
//! # Ok::<(), addressbook::AddressBookError>(())
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;

pub use error::{AddressBookError, AddressBookResult};
