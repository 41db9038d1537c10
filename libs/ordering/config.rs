//! Ordering configuration
//!
//! YAML configuration for running a chain of strategies over one data set.

use crate::strategies::StrategyKind;
use crate::traits::OrderingError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Environment variable overriding `log_level`
pub const LOG_LEVEL_ENV: &str = "ORDERING_LOG_LEVEL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid strategy: {0}")]
    Strategy(#[from] OrderingError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main ordering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Sequence handed to every strategy in the chain
    #[serde(default = "default_data")]
    pub data: Vec<String>,

    /// Strategy chain: the first one is installed at construction,
    /// each following one replaces it before the next ordering
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data() -> Vec<String> {
    ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
}

fn default_strategies() -> Vec<String> {
    vec!["sort".to_string(), "reverse".to_string()]
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data: default_data(),
            strategies: default_strategies(),
        }
    }
}

impl OrderingConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist

        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: OrderingConfig = serde_yaml::from_str(&yaml_content)?;

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: OrderingConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        if self.strategies.is_empty() {
            return Err(ConfigError::ValidationError(
                "strategies must name at least one strategy".to_string(),
            ));
        }

        self.strategy_chain()?;
        Ok(())
    }

    /// Resolve the configured strategy names
    pub fn strategy_chain(&self) -> Result<Vec<StrategyKind>> {
        self.strategies
            .iter()
            .map(|name| name.parse::<StrategyKind>().map_err(ConfigError::from))
            .collect()
    }

    /// Log configuration summary
    ///
    /// The strategy chain is left out: callers may replace it, so they log
    /// the chain they actually run.
    pub fn log(&self) {
        info!("Ordering Configuration:");
        info!("  Log level: {}", self.log_level);
        info!("  Data: {:?}", self.data);
    }
}
