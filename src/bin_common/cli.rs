//! CLI utilities for binaries
//!
//! Handles configuration loading and environment variables
//! for all binary executables.

use std::path::PathBuf;

/// Environment variable holding a comma-separated strategy chain
pub const STRATEGY_NAME_ENV: &str = "STRATEGY_NAME";

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Ordering configuration (ordering_config.yaml)
    Ordering,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Ordering => "config/ordering_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    pub fn env_var_name(&self) -> &str {
        match self {
            ConfigType::Ordering => "ORDERING_CONFIG_PATH",
            ConfigType::Custom(_) => "CONFIG_PATH",
        }
    }
}

/// Load configuration path from environment or use default
///
/// # Arguments
/// * `config_type` - Type of configuration to load
///
/// # Returns
/// Path to the configuration file
///
/// # Examples
/// ```
/// use strategy_cases::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Ordering);
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    std::env::var(config_type.env_var_name())
        .unwrap_or_else(|_| config_type.default_path().to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Where the strategy chain came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySource {
    Env,
    Args,
    Config,
}

/// Pick the strategy chain
///
/// Priority: `STRATEGY_NAME` env value (comma-separated) > CLI args > config file.
/// Blank entries are dropped; a source that yields nothing falls through.
pub fn resolve_strategy_names(
    env_value: Option<&str>,
    args: &[String],
    config: &[String],
) -> (StrategySource, Vec<String>) {
    if let Some(value) = env_value {
        let names = split_names(value.split(','));
        if !names.is_empty() {
            return (StrategySource::Env, names);
        }
    }

    let names = split_names(args.iter().map(String::as_str));
    if !names.is_empty() {
        return (StrategySource::Args, names);
    }

    (StrategySource::Config, config.to_vec())
}

fn split_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
