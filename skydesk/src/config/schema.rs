//! Configuration schema definitions.
//!
//! This module defines the configuration structure for skydesk: where the
//! snapshot files live and whether changes are saved automatically.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{resolve_data_dir, StorageConfig};

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to the defaults.
///
/// # Examples
///
/// ```
/// use skydesk::config::Config;
///
/// let config = Config {
///     flights_file: Some("routes.txt".to_string()),
///     autosave: Some(false),
///     ..Default::default()
/// };
/// assert!(!config.autosave_enabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the snapshot files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Flight snapshot file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights_file: Option<String>,

    /// Customer snapshot file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers_file: Option<String>,

    /// Queue snapshot file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queues_file: Option<String>,

    /// Save after every change (default `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosave: Option<bool>,
}

impl Config {
    /// Whether changes are saved as soon as they are made.
    #[must_use]
    pub fn autosave_enabled(&self) -> bool {
        self.autosave.unwrap_or(true)
    }

    /// Resolves the snapshot file locations.
    ///
    /// Without a configured `data_dir` this falls back to
    /// `SKYDESK_DATA_DIR`, then `~/.skydesk`.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is configured and the home
    /// directory cannot be determined.
    pub fn storage(&self) -> Result<StorageConfig> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => resolve_data_dir()?,
        };
        let mut storage = StorageConfig::new(data_dir);
        if let Some(name) = &self.flights_file {
            storage = storage.with_flights_file(name.clone());
        }
        if let Some(name) = &self.customers_file {
            storage = storage.with_customers_file(name.clone());
        }
        if let Some(name) = &self.queues_file {
            storage = storage.with_queues_file(name.clone());
        }
        Ok(storage)
    }
}
