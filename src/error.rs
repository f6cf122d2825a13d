//! Errors reported by tree operations.

use thiserror::Error;

/// Errors returned when modifying a [`Tree`](crate::Tree).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key must contain at least one byte to be stored.
    #[error("cannot insert a zero-length key")]
    EmptyKey,
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
