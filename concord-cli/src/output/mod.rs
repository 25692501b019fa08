//! Output formatting module

use anyhow::Result;
use concord_core::{Row, Value};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a single output row
    fn write_row(&mut self, row: &Row) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render a field value for plain-text output: strings verbatim, anything
/// else in its compact JSON form
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
