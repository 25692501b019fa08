//! Markdown output formatter

use super::{render_value, OutputFormatter};
use anyhow::Result;
use concord_core::Row;
use std::io::Write;

/// Markdown formatter - outputs rows as a table with a match-count footer
///
/// The header comes from the first row's field names; later rows are
/// rendered against that header.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    columns: Option<Vec<String>>,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            columns: None,
            match_count: 0,
        }
    }

    fn write_header(&mut self, row: &Row) -> Result<()> {
        let columns: Vec<String> = row.field_names().map(String::from).collect();
        writeln!(self.writer, "| {} |", columns.join(" | "))?;
        writeln!(
            self.writer,
            "|{}|",
            columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        )?;
        self.columns = Some(columns);
        Ok(())
    }
}

/// Escape a value for a markdown table cell
fn cell(value: String) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn write_row(&mut self, row: &Row) -> Result<()> {
        if self.columns.is_none() {
            self.write_header(row)?;
        }
        let columns = self.columns.as_ref().expect("header written above");

        let cells: Vec<String> = columns
            .iter()
            .map(|name| cell(row.get(name).map(render_value).unwrap_or_default()))
            .collect();
        writeln!(self.writer, "| {} |", cells.join(" | "))?;

        self.match_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
