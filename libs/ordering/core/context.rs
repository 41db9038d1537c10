//! Strategy context
//!
//! Holds the active ordering strategy and delegates ordering work to it.
//! The context never inspects which strategy is installed.

use crate::traits::OrderStrategy;
use std::fmt;
use tracing::debug;

/// Sequence ordered by [`Context::do_business_logic`]
pub const SAMPLE_DATA: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Context that delegates ordering to a swappable strategy
pub struct Context {
    strategy: Box<dyn OrderStrategy>,
}

impl Context {
    /// Create a new context with an initial strategy
    pub fn new(strategy: Box<dyn OrderStrategy>) -> Self {
        debug!("Context created with strategy '{}'", strategy.name());
        Self { strategy }
    }

    /// Replace the active strategy
    ///
    /// Every subsequent call to [`do_order`](Self::do_order) uses the new strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn OrderStrategy>) {
        debug!(
            "Strategy changed: '{}' -> '{}'",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Order the data with whichever strategy is installed right now
    pub fn do_order<I, S>(&self, data: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data: Vec<String> = data.into_iter().map(Into::into).collect();
        debug!(
            "Ordering {} items with strategy '{}'",
            data.len(),
            self.strategy.name()
        );
        self.strategy.order(data)
    }

    /// Order [`SAMPLE_DATA`] without knowing which strategy does the work
    pub fn do_business_logic(&self) -> Vec<String> {
        debug!("Ordering sample data with strategy '{}'", self.strategy.name());
        self.do_order(SAMPLE_DATA)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
