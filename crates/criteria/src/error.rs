//! Error types for the criteria crate.
//!
//! The algebra itself cannot fail. Errors only arise when building a
//! combinator from input that has to be validated up front, such as a regular
//! expression pattern or a sort direction name.

use thiserror::Error;

/// Errors that can occur when constructing predicates or orderings.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A sort direction name other than `asc`/`ascending`/`desc`/`descending`.
    #[error("unknown sort direction: {0:?}")]
    UnknownDirection(String),
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
