//! Reversed element ordering

use crate::traits::OrderStrategy;

/// Inverts the element order of the sequence (last element first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseStrategy;

impl OrderStrategy for ReverseStrategy {
    fn name(&self) -> &str {
        "reverse"
    }

    fn order(&self, mut data: Vec<String>) -> Vec<String> {
        data.reverse();
        data
    }
}
