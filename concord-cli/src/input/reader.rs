//! Row construction from input files

use crate::error::CliError;
use anyhow::{Context, Result};
use concord_core::{Row, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Field carrying the originating file path in plain-text mode
pub const PATH_FIELD: &str = "path";

/// Field carrying the document text in plain-text mode
pub const TEXT_FIELD: &str = "text";

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// One row per file, with `path` and `text` fields
pub fn text_rows(files: &[PathBuf]) -> Result<Vec<Row>> {
    files
        .iter()
        .map(|path| {
            let text = read_file(path)?;
            let mut row = Row::new();
            row.set(PATH_FIELD, Value::from(path.display().to_string()));
            row.set(TEXT_FIELD, Value::from(text));
            Ok(row)
        })
        .collect()
}

/// JSON Lines: every non-empty line of every file becomes one row
///
/// Each line must hold a JSON object; field order inside the object is
/// preserved.
pub fn jsonl_rows(files: &[PathBuf]) -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    for path in files {
        let content = read_file(path)?;
        for (line_idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(line).with_context(|| {
                format!(
                    "Malformed JSON Lines record at {}:{}",
                    path.display(),
                    line_idx + 1
                )
            })?;
            match value {
                Value::Object(object) => {
                    let mut row = Row::new();
                    for (name, value) in object {
                        row.set(name, value);
                    }
                    rows.push(row);
                }
                _ => {
                    return Err(CliError::MalformedRecord {
                        path: path.display().to_string(),
                        line: line_idx + 1,
                    }
                    .into())
                }
            }
        }
    }

    Ok(rows)
}
