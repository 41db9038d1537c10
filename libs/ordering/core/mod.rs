//! # Core
//!
//! The delegating context and its thread-shared wrapper.

pub mod context;
pub mod shared;

pub use context::{Context, SAMPLE_DATA};
pub use shared::SharedContext;
