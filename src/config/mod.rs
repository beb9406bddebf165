//! Configuration module for the address book
//!
//! - Path resolution for settings, logs and exports
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AddressBookPaths;
pub use settings::Settings;
