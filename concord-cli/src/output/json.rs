//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use concord_core::Row;
use std::io::Write;

/// JSON formatter - outputs all rows as one pretty-printed array
pub struct JsonFormatter<W: Write> {
    writer: W,
    rows: Vec<Row>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_row(&mut self, row: &Row) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
