//! Concord CLI library
//!
//! This library provides the command-line interface for the Concord
//! context extraction system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
