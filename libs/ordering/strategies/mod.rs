//! Ordering Strategies Module
//!
//! Built-in strategies plus name-based construction for configuration.

pub mod closure;
pub mod reverse;
pub mod sort;

// Re-exports
pub use closure::{reverse_strategy, sort_strategy, FnStrategy};
pub use reverse::ReverseStrategy;
pub use sort::SortStrategy;

use crate::traits::{OrderStrategy, OrderingError};
use std::fmt;
use std::str::FromStr;

/// Available strategy types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Sort,
    Reverse,
}

impl StrategyKind {
    /// Get the strategy name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Reverse => "reverse",
        }
    }

    /// List all available strategy names
    pub fn available() -> Vec<&'static str> {
        vec!["sort", "reverse"]
    }
}

impl FromStr for StrategyKind {
    type Err = OrderingError;

    /// Parse strategy type from string (case-insensitive, ignores `-` and `_`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "sort" => Ok(Self::Sort),
            "reverse" => Ok(Self::Reverse),
            _ => Err(OrderingError::UnknownStrategy {
                name: s.to_string(),
                available: Self::available().join(", "),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory function to create strategies based on type
pub fn create_strategy(kind: &StrategyKind) -> Box<dyn OrderStrategy> {
    match kind {
        StrategyKind::Sort => Box::new(SortStrategy),
        StrategyKind::Reverse => Box::new(ReverseStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_kind() {
        assert_eq!("sort".parse::<StrategyKind>(), Ok(StrategyKind::Sort));
        assert_eq!("SORT".parse::<StrategyKind>(), Ok(StrategyKind::Sort));
        assert_eq!(" reverse ".parse::<StrategyKind>(), Ok(StrategyKind::Reverse));
        assert_eq!("Re-Verse".parse::<StrategyKind>(), Ok(StrategyKind::Reverse));
        assert_eq!("re_verse".parse::<StrategyKind>(), Ok(StrategyKind::Reverse));
    }

    #[test]
    fn test_unknown_strategy_lists_available() {
        let err = "shuffle".parse::<StrategyKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown strategy: 'shuffle'. Available strategies: sort, reverse"
        );
    }

    #[test]
    fn test_names_round_trip() {
        for name in StrategyKind::available() {
            let kind: StrategyKind = name.parse().unwrap();
            assert_eq!(kind.name(), name);
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_create_strategy() {
        let data = vec!["b".to_string(), "c".to_string(), "a".to_string()];

        let sort = create_strategy(&StrategyKind::Sort);
        assert_eq!(sort.name(), "sort");
        assert_eq!(sort.order(data.clone()), vec!["a", "b", "c"]);

        let reverse = create_strategy(&StrategyKind::Reverse);
        assert_eq!(reverse.name(), "reverse");
        assert_eq!(reverse.order(data), vec!["a", "c", "b"]);
    }
}
