//! Strategy Demo Binary
//!
//! Orders one data set with a chain of strategies, swapping the active
//! strategy on a single context between runs.
//!
//! Usage:
//!   STRATEGY_NAME=sort,reverse ./strategy_demo   # Via environment variable
//!   ./strategy_demo reverse sort                 # Via CLI arguments
//!   ./strategy_demo                              # From config/ordering_config.yaml

use anyhow::Result;
use ordering::{init_tracing_with_level, OrderingConfig, StrategyKind};
use strategy_cases::bin_common::cli::STRATEGY_NAME_ENV;
use strategy_cases::bin_common::{
    load_config_from_env, parse_args, resolve_strategy_names, ChainRunner, ConfigType, DemoRunner,
    RunConfig, StrategySource,
};
use tracing::info;

fn main() -> Result<()> {
    // Load config
    let config_path = load_config_from_env(ConfigType::Ordering);
    let config = OrderingConfig::load(&config_path)?;

    // Initialize logging
    init_tracing_with_level(&config.log_level);
    config.log();

    // Determine the strategy chain
    // Priority: STRATEGY_NAME env var > CLI args > config file
    let env_value = std::env::var(STRATEGY_NAME_ENV).ok();
    let args = parse_args();
    let (source, names) = resolve_strategy_names(env_value.as_deref(), &args, &config.strategies);
    match source {
        StrategySource::Env => info!("Strategies from {} env var", STRATEGY_NAME_ENV),
        StrategySource::Args => info!("Strategies from CLI arguments"),
        StrategySource::Config => info!("Strategies from {}", config_path.display()),
    }

    let chain = names
        .iter()
        .map(|name| name.parse::<StrategyKind>())
        .collect::<Result<Vec<_>, _>>()?;

    let run_config = RunConfig::new("Strategy Demo")
        .with_description("Context orders data using a strategy it knows nothing about");
    let mut runner = ChainRunner::new(run_config, config.data.clone(), chain);
    runner.execute()
}
