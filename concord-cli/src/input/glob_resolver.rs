//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to concrete file paths
///
/// Every pattern goes through glob expansion; a plain path matches itself.
/// The result is sorted and deduplicated. Zero resolved files is an error.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
