//! Integration test: Configuration utilities
//!
//! Tests the bin_common configuration loading functionality together with
//! the ordering config it points at.

use std::io::Write;
use strategy_cases::bin_common::{
    load_config_from_env, ChainRunner, ConfigType, DemoRunner, RunConfig,
};
use strategy_cases::ordering::{OrderingConfig, StrategyKind};

#[test]
fn test_custom_config() {
    let custom = ConfigType::Custom("custom/path.yaml".to_string());
    let config_path = load_config_from_env(custom);

    assert_eq!(config_path.to_str().unwrap(), "custom/path.yaml");
}

#[test]
fn test_config_type_default_paths() {
    assert_eq!(
        ConfigType::Ordering.default_path(),
        "config/ordering_config.yaml"
    );

    let custom = ConfigType::Custom("test.yaml".to_string());
    assert_eq!(custom.default_path(), "test.yaml");
}

#[test]
fn test_env_path_override_drives_a_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "data: [d, b, e, a, c]").unwrap();
    writeln!(file, "strategies: [reverse, sort]").unwrap();

    std::env::set_var(ConfigType::Ordering.env_var_name(), file.path());
    let config_path = load_config_from_env(ConfigType::Ordering);
    std::env::remove_var(ConfigType::Ordering.env_var_name());
    assert_eq!(config_path, file.path());

    let config = OrderingConfig::load(&config_path).unwrap();
    let chain = config.strategy_chain().unwrap();
    assert_eq!(chain, vec![StrategyKind::Reverse, StrategyKind::Sort]);

    let mut runner = ChainRunner::new(RunConfig::new("test"), config.data, chain);
    runner.execute().unwrap();

    let results: Vec<Vec<String>> = runner.results().iter().map(|(_, r)| r.clone()).collect();
    assert_eq!(
        results,
        vec![
            vec!["c", "a", "e", "b", "d"],
            vec!["a", "b", "c", "d", "e"],
        ]
    );
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/ordering_config.yaml");
    let config = OrderingConfig::load(path).unwrap();

    assert_eq!(config.data, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(
        config.strategy_chain().unwrap(),
        vec![StrategyKind::Sort, StrategyKind::Reverse]
    );
}
