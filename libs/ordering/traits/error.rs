use thiserror::Error;

/// Main error type for ordering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// No built-in strategy matches the requested name
    #[error("Unknown strategy: '{name}'. Available strategies: {available}")]
    UnknownStrategy { name: String, available: String },
}

/// Result type for ordering operations
pub type Result<T> = std::result::Result<T, OrderingError>;
