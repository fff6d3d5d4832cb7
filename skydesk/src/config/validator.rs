//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::storage::{DEFAULT_CUSTOMERS_FILE, DEFAULT_FLIGHTS_FILE, DEFAULT_QUEUES_FILE};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use skydesk::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let clash = Config {
///     flights_file: Some("data.txt".into()),
///     queues_file: Some("data.txt".into()),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&clash).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a file name is empty, is not a plain
    /// file name, or is shared by two snapshots, or if `data_dir` is empty.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(dir) = &config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_dir".into(),
                    message: "Data directory cannot be empty".into(),
                });
            }
        }

        let names = [
            (
                "flights_file",
                config.flights_file.as_deref().unwrap_or(DEFAULT_FLIGHTS_FILE),
            ),
            (
                "customers_file",
                config.customers_file.as_deref().unwrap_or(DEFAULT_CUSTOMERS_FILE),
            ),
            (
                "queues_file",
                config.queues_file.as_deref().unwrap_or(DEFAULT_QUEUES_FILE),
            ),
        ];
        for (field, name) in names {
            Self::validate_file_name(field, name)?;
        }
        for (i, (field, name)) in names.iter().enumerate() {
            if let Some((other, _)) = names[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(Error::Validation {
                    field: (*field).into(),
                    message: format!("'{name}' is also used as {other}"),
                });
            }
        }
        Ok(())
    }

    fn validate_file_name(field: &str, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "File name cannot be empty".into(),
            });
        }
        let path = Path::new(name);
        if path.file_name().map_or(true, |file| file != path.as_os_str()) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{name}' must be a plain file name"),
            });
        }
        Ok(())
    }
}
