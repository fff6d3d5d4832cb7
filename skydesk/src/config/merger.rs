//! Configuration merging.

use crate::config::schema::Config;

/// Layers configurations on top of each other.
///
/// # Examples
///
/// ```
/// use skydesk::config::{Config, ConfigMerger};
///
/// let mut result = Config {
///     autosave: Some(true),
///     ..Default::default()
/// };
/// let high = Config {
///     autosave: Some(false),
///     ..Default::default()
/// };
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.autosave, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }
        if source.flights_file.is_some() {
            target.flights_file.clone_from(&source.flights_file);
        }
        if source.customers_file.is_some() {
            target.customers_file.clone_from(&source.customers_file);
        }
        if source.queues_file.is_some() {
            target.queues_file.clone_from(&source.queues_file);
        }
        if source.autosave.is_some() {
            target.autosave = source.autosave;
        }
    }
}
