//! Thread-shared strategy context
//!
//! Wraps a [`Context`] in a read-write lock so one context can be shared by
//! several callers. Strategy swaps take the write lock; ordering takes the
//! read lock, so concurrent queries never observe a half-installed strategy.

use super::Context;
use crate::traits::OrderStrategy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a lock-protected [`Context`]
#[derive(Clone, Debug)]
pub struct SharedContext {
    inner: Arc<RwLock<Context>>,
}

impl SharedContext {
    /// Create a new shared context with an initial strategy
    pub fn new(strategy: Box<dyn OrderStrategy>) -> Self {
        Self::from_context(Context::new(strategy))
    }

    /// Share an existing context
    pub fn from_context(context: Context) -> Self {
        Self {
            inner: Arc::new(RwLock::new(context)),
        }
    }

    /// Replace the active strategy for every handle
    pub fn set_strategy(&self, strategy: Box<dyn OrderStrategy>) {
        self.inner.write().set_strategy(strategy);
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> String {
        self.inner.read().strategy_name().to_string()
    }

    /// Order the data with the strategy installed at call time
    pub fn do_order<I, S>(&self, data: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.read().do_order(data)
    }

    /// Recover the context if this is the last handle
    ///
    /// Returns the handle back when other clones are still alive.
    pub fn into_inner(self) -> Result<Context, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{ReverseStrategy, SortStrategy};
    use std::thread;

    #[test]
    fn test_swap_visible_through_clones() {
        let shared = SharedContext::new(Box::new(SortStrategy));
        let other = shared.clone();

        assert_eq!(other.do_order(["b", "a", "c"]), vec!["a", "b", "c"]);

        shared.set_strategy(Box::new(ReverseStrategy));
        assert_eq!(other.strategy_name(), "reverse");
        assert_eq!(other.do_order(["b", "a", "c"]), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_swap_visible_across_threads() {
        let shared = SharedContext::new(Box::new(SortStrategy));

        let writer = shared.clone();
        thread::spawn(move || writer.set_strategy(Box::new(ReverseStrategy)))
            .join()
            .unwrap();

        assert_eq!(shared.do_order(["a", "b", "c"]), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_concurrent_readers_see_a_whole_strategy() {
        let shared = SharedContext::new(Box::new(SortStrategy));
        let input = ["c", "a", "b"];

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                thread::spawn(move || {
                    (0..100)
                        .map(|_| reader.do_order(input))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for i in 0..100 {
            if i % 2 == 0 {
                shared.set_strategy(Box::new(ReverseStrategy));
            } else {
                shared.set_strategy(Box::new(SortStrategy));
            }
        }

        for reader in readers {
            for result in reader.join().unwrap() {
                assert!(result == ["a", "b", "c"] || result == ["b", "a", "c"]);
            }
        }
    }

    #[test]
    fn test_into_inner() {
        let shared = SharedContext::new(Box::new(SortStrategy));
        let other = shared.clone();

        let shared = shared.into_inner().unwrap_err();
        drop(other);

        let context = shared.into_inner().unwrap();
        assert_eq!(context.strategy_name(), "sort");
    }
}
