//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::storage::resolve_data_dir;

/// Builds the effective configuration.
///
/// Sources, from lowest to highest precedence: built-in defaults, the
/// `config.yaml` file in the data directory, `SKYDESK_*` environment
/// variables, and the programmatic override given to
/// [`with_config`](Self::with_config).
///
/// # Examples
///
/// ```
/// use skydesk::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         autosave: Some(false),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.autosave, Some(false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks for `config.yaml` in `dir` and uses it as the data directory.
    ///
    /// Only a programmatic override naming another `data_dir` beats it.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Loads, merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or if the
    /// merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let dir = match &self.data_dir {
                Some(dir) => dir.clone(),
                None => Self::env_or_default_dir(self.skip_env)?,
            };
            if let Some(source) = ConfigLoader::load_from_dir(&dir)? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn env_or_default_dir(skip_env: bool) -> Result<PathBuf> {
        if skip_env {
            crate::storage::default_data_dir()
        } else {
            resolve_data_dir()
        }
    }
}
