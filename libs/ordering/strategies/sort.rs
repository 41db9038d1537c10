//! Ascending lexicographic ordering

use crate::traits::OrderStrategy;

/// Sorts the sequence into non-descending order by default string comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStrategy;

impl OrderStrategy for SortStrategy {
    fn name(&self) -> &str {
        "sort"
    }

    fn order(&self, mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data
    }
}
