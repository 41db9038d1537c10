//! Closure-backed strategies
//!
//! Lets a plain function or closure act as an [`OrderStrategy`] without
//! declaring a dedicated type for it.

use crate::traits::OrderStrategy;
use std::fmt;

/// Strategy backed by a closure
pub struct FnStrategy<F> {
    name: String,
    func: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(Vec<String>) -> Vec<String> + Send + Sync,
{
    /// Create a new closure strategy
    ///
    /// # Arguments
    /// * `name` - Name reported for logging
    /// * `func` - The ordering function
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> OrderStrategy for FnStrategy<F>
where
    F: Fn(Vec<String>) -> Vec<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self, data: Vec<String>) -> Vec<String> {
        (self.func)(data)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy").field("name", &self.name).finish()
    }
}

/// Closure equivalent of [`SortStrategy`](super::SortStrategy)
pub fn sort_strategy() -> FnStrategy<impl Fn(Vec<String>) -> Vec<String> + Send + Sync> {
    FnStrategy::new("sort", |mut data: Vec<String>| {
        data.sort();
        data
    })
}

/// Closure equivalent of [`ReverseStrategy`](super::ReverseStrategy)
pub fn reverse_strategy() -> FnStrategy<impl Fn(Vec<String>) -> Vec<String> + Send + Sync> {
    FnStrategy::new("reverse", |mut data: Vec<String>| {
        data.reverse();
        data
    })
}
