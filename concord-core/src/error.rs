//! Core error types

use thiserror::Error;

/// Errors produced by the extraction core
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A search term marked as a pattern failed to compile
    #[error("invalid pattern in search term '{term}': {source}")]
    InvalidPattern {
        /// Text of the offending term
        term: String,
        /// The underlying compile error
        source: regex::Error,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
