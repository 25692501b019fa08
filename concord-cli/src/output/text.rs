//! Plain text output formatter

use super::{render_value, OutputFormatter};
use anyhow::Result;
use concord_core::Row;
use std::io::Write;

/// Plain text formatter - one concordance line per match
///
/// Each line carries the source row index and the extracted context, with
/// newlines flattened so one match stays one line.
pub struct TextFormatter<W: Write> {
    writer: W,
    document_field: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter for the given document field
    pub fn new(writer: W, document_field: impl Into<String>) -> Self {
        Self {
            writer,
            document_field: document_field.into(),
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_row(&mut self, row: &Row) -> Result<()> {
        let source = row
            .get("source_doc")
            .map(render_value)
            .unwrap_or_default();
        let context = row
            .get(&self.document_field)
            .map(render_value)
            .unwrap_or_default();
        writeln!(self.writer, "{source}\t{}", context.replace('\n', " "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::Value;

    fn match_row() -> Row {
        [
            ("text".to_string(), Value::from("quick brown fox")),
            ("source_doc".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_one_line_per_row() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, "text");
        formatter.write_row(&match_row()).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "2\tquick brown fox\n");
    }

    #[test]
    fn test_newlines_are_flattened() {
        let mut row = match_row();
        row.set("text", Value::from("line one\nline two"));

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, "text");
        formatter.write_row(&row).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "2\tline one line two\n");
    }
}
