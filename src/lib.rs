//! Strategy Cases - Main Library
//!
//! Demonstrates swapping ordering strategies at runtime.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI, runners)
//! - **ordering**: Strategies and the delegating context (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use strategy_cases::bin_common::{load_config_from_env, ConfigType};
//! use strategy_cases::ordering::{Context, SortStrategy};
//! ```

// Re-export workspace libraries for convenience
pub use ordering;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables
    //!
    //! Provides config path resolution and a standard runner for the
    //! demonstration binaries.

    pub mod cli;
    pub mod runner;

    pub use cli::{
        load_config_from_env, parse_args, resolve_strategy_names, ConfigType, StrategySource,
    };
    pub use runner::{ChainRunner, DemoRunner, RunConfig};
}
