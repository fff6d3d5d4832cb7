//! Configuration system for skydesk.
//!
//! This module provides layered configuration with support for:
//! - a YAML configuration file (`config.yaml` in the data directory)
//! - environment variable overrides
//! - programmatic configuration via builder pattern
//! - validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SKYDESK_*`)
//! 3. `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use skydesk::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/srv/desk"))
//!     .build()
//!     .unwrap();
//!
//! println!("snapshots in {}", config.storage().unwrap().data_dir.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, CONFIG_FILE_NAME};
pub use validator::ConfigValidator;
