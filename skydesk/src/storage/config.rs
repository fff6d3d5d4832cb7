//! Snapshot file locations.
//!
//! This module resolves where the three snapshot files live: a data
//! directory plus one file name per store.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default file name of the flight snapshot.
pub const DEFAULT_FLIGHTS_FILE: &str = "flights.txt";
/// Default file name of the customer snapshot.
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
/// Default file name of the queue snapshot.
pub const DEFAULT_QUEUES_FILE: &str = "queues.txt";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "SKYDESK_DATA_DIR";

/// Where a [`SnapshotStore`](crate::storage::SnapshotStore) reads and writes.
///
/// # Examples
///
/// ```
/// use skydesk::StorageConfig;
///
/// let config = StorageConfig::new("/tmp/desk").with_flights_file("routes.txt");
/// assert_eq!(config.flights_path().to_str().unwrap(), "/tmp/desk/routes.txt");
/// assert_eq!(config.queues_path().to_str().unwrap(), "/tmp/desk/queues.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the snapshot files.
    pub data_dir: PathBuf,
    /// Flight snapshot file name, relative to `data_dir`.
    pub flights_file: String,
    /// Customer snapshot file name, relative to `data_dir`.
    pub customers_file: String,
    /// Queue snapshot file name, relative to `data_dir`.
    pub queues_file: String,
}

impl StorageConfig {
    /// Uses `data_dir` with the default file names.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            flights_file: DEFAULT_FLIGHTS_FILE.into(),
            customers_file: DEFAULT_CUSTOMERS_FILE.into(),
            queues_file: DEFAULT_QUEUES_FILE.into(),
        }
    }

    /// Sets the flight snapshot file name.
    #[must_use]
    pub fn with_flights_file(mut self, name: impl Into<String>) -> Self {
        self.flights_file = name.into();
        self
    }

    /// Sets the customer snapshot file name.
    #[must_use]
    pub fn with_customers_file(mut self, name: impl Into<String>) -> Self {
        self.customers_file = name.into();
        self
    }

    /// Sets the queue snapshot file name.
    #[must_use]
    pub fn with_queues_file(mut self, name: impl Into<String>) -> Self {
        self.queues_file = name.into();
        self
    }

    /// Full path of the flight snapshot.
    #[must_use]
    pub fn flights_path(&self) -> PathBuf {
        self.data_dir.join(&self.flights_file)
    }

    /// Full path of the customer snapshot.
    #[must_use]
    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    /// Full path of the queue snapshot.
    #[must_use]
    pub fn queues_path(&self) -> PathBuf {
        self.data_dir.join(&self.queues_file)
    }
}

/// Returns the default data directory, `~/.skydesk`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".skydesk"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory from `SKYDESK_DATA_DIR` or the default.
///
/// # Errors
///
/// Returns an error if the variable is unset and the home directory cannot
/// be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}
