//! Error types.

use thiserror::Error;

/// Errors raised by the adapter and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// An integer range was requested with `max < min`.
    #[error("inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),
}
