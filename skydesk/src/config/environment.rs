//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SKYDESK_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::storage::DATA_DIR_ENV;

/// Overrides the flight snapshot file name.
pub const FLIGHTS_FILE_ENV: &str = "SKYDESK_FLIGHTS_FILE";
/// Overrides the customer snapshot file name.
pub const CUSTOMERS_FILE_ENV: &str = "SKYDESK_CUSTOMERS_FILE";
/// Overrides the queue snapshot file name.
pub const QUEUES_FILE_ENV: &str = "SKYDESK_QUEUES_FILE";
/// Turns autosave on or off.
pub const AUTOSAVE_ENV: &str = "SKYDESK_AUTOSAVE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use skydesk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `SKYDESK_AUTOSAVE` is not a boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::var(DATA_DIR_ENV) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(name) = Self::var(FLIGHTS_FILE_ENV) {
            config.flights_file = Some(name);
        }
        if let Some(name) = Self::var(CUSTOMERS_FILE_ENV) {
            config.customers_file = Some(name);
        }
        if let Some(name) = Self::var(QUEUES_FILE_ENV) {
            config.queues_file = Some(name);
        }
        if let Some(value) = Self::var(AUTOSAVE_ENV) {
            config.autosave = Some(Self::parse_bool(AUTOSAVE_ENV, &value)?);
        }
        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
