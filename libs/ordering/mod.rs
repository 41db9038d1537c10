//! # Ordering
//!
//! Interchangeable ordering strategies behind a single delegating context.
//!
//! ## Features
//!
//! - **Pluggable strategies**: anything implementing [`OrderStrategy`] can be installed
//! - **Runtime swapping**: replace the active strategy at any time, last write wins
//! - **Closure strategies**: wrap plain closures with [`FnStrategy`]
//! - **Shared contexts**: [`SharedContext`] serializes swaps and queries across threads
//!
//! ## Example
//!
//! ```rust
//! use ordering::{Context, ReverseStrategy, SortStrategy};
//!
//! let mut context = Context::new(Box::new(SortStrategy));
//! assert_eq!(context.do_order(["b", "d", "a"]), vec!["a", "b", "d"]);
//!
//! context.set_strategy(Box::new(ReverseStrategy));
//! assert_eq!(context.do_order(["b", "d", "a"]), vec!["a", "d", "b"]);
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod strategies;
pub mod traits;

// Re-export all traits
pub use traits::*;

// Re-export strategies
pub use strategies::{
    create_strategy, reverse_strategy, sort_strategy, FnStrategy, ReverseStrategy, SortStrategy,
    StrategyKind,
};

// Re-export core context types
pub use crate::core::{Context, SharedContext, SAMPLE_DATA};

pub use config::{ConfigError, OrderingConfig};
pub use logging::init_tracing_with_level;

/// Type alias for Result with OrderingError
pub type Result<T> = std::result::Result<T, traits::OrderingError>;
