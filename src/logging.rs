//! Activity logging
//!
//! Every state change and query result is emitted through `tracing`. The
//! subscriber installed here writes each event twice: to the console (stderr,
//! so it never interleaves with menu output on stdout) and to an append-only
//! log file. Lines carry a local timestamp, level, source component and message.

use std::fs::OpenOptions;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{AddressBookPaths, Settings};
use crate::error::{AddressBookError, AddressBookResult};

/// Timestamp format used on every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock timestamps for log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Parse filter directives such as `"info"` or `"addressbook::directory=debug"`
pub fn filter_from(directives: &str) -> AddressBookResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        AddressBookError::Config(format!("Invalid log filter '{}': {}", directives, e))
    })
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `Settings::log_level`. Calling this more
/// than once returns a `Config` error.
pub fn init(paths: &AddressBookPaths, settings: &Settings) -> AddressBookResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            AddressBookError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from(&settings.log_level)?,
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTimestamp)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AddressBookError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_format_parses() {
        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        assert!(NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_filter_from_valid_directives() {
        assert!(filter_from("info").is_ok());
        assert!(filter_from("warn,addressbook::directory=debug").is_ok());
    }

    #[test]
    fn test_filter_from_invalid_directives() {
        let err = filter_from("addressbook=loud").unwrap_err();
        assert!(matches!(err, AddressBookError::Config(_)));
    }
}
