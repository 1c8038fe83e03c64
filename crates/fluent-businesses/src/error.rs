//! Error types for fluent-businesses operations.
//!
//! Chain operations never fail. The only fallible entry point is parsing a
//! [`RankField`](crate::rank::RankField) from a record field name.

use thiserror::Error;

/// The error type for fluent-businesses operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not refer to any business record field.
    #[error("Unknown business field: {0}")]
    UnknownField(String),

    /// The name refers to a record field that cannot be used as a ranking key.
    #[error("Field is not numeric and cannot be ranked: {0}")]
    NotRankable(String),
}

/// A specialized Result type for fluent-businesses operations.
pub type Result<T> = std::result::Result<T, Error>;
