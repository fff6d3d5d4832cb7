//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, opening the desk, saving, and
//! assembling customer descriptions from arguments.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use clap::Args;
use skydesk::{
    Config, ConfigBuilder, CustomerSpec, DiscountTier, Passport, Patron, ReservationEngine,
    SnapshotStore,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Save once after the command instead of after every change.
    pub no_autosave: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.data_dir {
        builder = builder.with_data_dir(dir);
    }
    if global.no_autosave {
        builder = builder.with_config(Config {
            autosave: Some(false),
            ..Config::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Loads the desk from its snapshot files.
pub fn open_engine(global: &GlobalOptions) -> Result<ReservationEngine, CliError> {
    let config = load_configuration(global)?;
    let storage = config
        .storage()
        .map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!("using data directory {}", storage.data_dir.display());

    let engine = ReservationEngine::open(SnapshotStore::new(storage))?;
    Ok(engine.with_autosave(config.autosave_enabled()))
}

/// Writes any change the engine has not saved yet.
///
/// With autosave on this only retries a save that already failed.
pub fn save(engine: &mut ReservationEngine) -> Result<(), CliError> {
    engine
        .flush()
        .map_err(|e| CliError::SaveFailed(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a waiting time as hours and minutes.
pub fn format_waited(waited: chrono::Duration) -> String {
    let minutes = waited.num_minutes();
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}

/// Details for registering a customer on the fly.
///
/// Either all of `--name`, `--surname`, `--nationality`, `--address` and
/// `--phone` are given, registering a new customer, or none of them, naming
/// an existing one.
#[derive(Args, Debug, Clone, Default)]
pub struct NewCustomerArgs {
    /// First name (registers a new customer)
    #[arg(long)]
    pub name: Option<String>,

    /// Surname
    #[arg(long)]
    pub surname: Option<String>,

    /// Nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,

    /// Telephone number, digits only
    #[arg(long)]
    pub phone: Option<String>,

    /// Discount tier (none, student, senior, military, frequent-flyer)
    #[arg(long, value_name = "TIER")]
    pub discount: Option<DiscountTier>,
}

impl NewCustomerArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.nationality.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.discount.is_none()
    }

    /// Builds the patron for `passport`.
    pub fn patron(self, passport: Passport) -> Result<Patron, CliError> {
        if self.is_empty() {
            return Ok(Patron::Existing(passport));
        }
        Ok(Patron::New(self.into_spec(passport)?))
    }

    /// Builds a complete customer description for `passport`.
    pub fn into_spec(self, passport: Passport) -> Result<CustomerSpec, CliError> {
        let missing = |flag: &str| {
            CliError::InvalidArguments(format!("--{flag} is required to register a customer"))
        };
        Ok(CustomerSpec {
            passport,
            name: self.name.ok_or_else(|| missing("name"))?,
            surname: self.surname.ok_or_else(|| missing("surname"))?,
            nationality: self.nationality.ok_or_else(|| missing("nationality"))?,
            address: self.address.ok_or_else(|| missing("address"))?,
            phone: self.phone.ok_or_else(|| missing("phone"))?,
            discount: self.discount.unwrap_or_default(),
        })
    }
}
