//! # Ordering Traits
//!
//! Core abstractions shared by every ordering strategy:
//!
//! - **OrderStrategy**: Transform a sequence of strings into a reordered sequence
//! - **OrderingError**: Failures when resolving strategies by name

pub mod error;
pub mod strategy;

pub use error::{OrderingError, Result};
pub use strategy::OrderStrategy;
