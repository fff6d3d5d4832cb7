//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,10}"),
        prop::option::of("[a-z]{1,10}\\.txt"),
        prop::option::of("[a-z]{1,10}\\.txt"),
        prop::option::of("[a-z]{1,10}\\.txt"),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(dir, flights, customers, queues, autosave)| Config {
            data_dir: dir.map(PathBuf::from),
            flights_file: flights,
            customers_file: customers,
            queues_file: queues,
            autosave,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge([&low, &high]);

        prop_assert_eq!(merged.data_dir.clone(), high.data_dir.clone().or(low.data_dir.clone()));
        prop_assert_eq!(merged.flights_file.clone(), high.flights_file.clone().or(low.flights_file.clone()));
        prop_assert_eq!(merged.customers_file.clone(), high.customers_file.clone().or(low.customers_file.clone()));
        prop_assert_eq!(merged.queues_file.clone(), high.queues_file.clone().or(low.queues_file.clone()));
        prop_assert_eq!(merged.autosave, high.autosave.or(low.autosave));
    }

    // Merging a config onto itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
