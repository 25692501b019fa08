//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input files matched the given patterns
    NoInputFiles(String),
    /// A JSON Lines record was not a JSON object
    MalformedRecord {
        /// File the record came from
        path: String,
        /// 1-based line number
        line: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No input files matched: {patterns}")
            }
            CliError::MalformedRecord { path, line } => {
                write!(f, "Record at {path}:{line} is not a JSON object")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
