//! Context extraction over tabular rows
//!
//! Drives per-row, per-pattern scanning, applies the tokenizer selected by
//! the context granularity, computes windows and offsets, and assembles
//! output rows.

use crate::error::Result;
use crate::pattern::{compile_terms, CompiledPattern};
use crate::row::{Row, Value};
use crate::term::SearchTerm;
use crate::tokenize::ContextType;
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed name of the appended source-row index column
const SOURCE_DOC_COL: &str = "source_doc";

/// Observer notified once per document processed
///
/// `processed` increases monotonically up to `total`, the input row count.
/// Notifications are synchronous; implementations should return quickly.
pub trait ProgressSink {
    /// Called after a document's matches have all been computed
    fn on_document(&self, processed: usize, total: usize);
}

/// No-op progress sink
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_document(&self, _processed: usize, _total: usize) {}
}

/// Names of the appended output columns, collision-resolved once per call
struct OutputColumns {
    match_col: String,
    match_idx_col: String,
    context_idx_col: String,
}

impl OutputColumns {
    /// Grow each generated name with trailing underscores until it collides
    /// with no input field. The three names are disambiguated
    /// independently; `source_doc` is fixed.
    fn resolve(rows: &[Row]) -> Self {
        let taken: HashSet<&str> = rows.iter().flat_map(Row::field_names).collect();
        let resolve = |base: &str| {
            let mut name = base.to_string();
            while taken.contains(name.as_str()) {
                name.push('_');
            }
            name
        };
        Self {
            match_col: resolve("match"),
            match_idx_col: resolve("match_idx"),
            context_idx_col: resolve("context_idx"),
        }
    }
}

/// Scans documents for search terms and emits one row per match with its
/// surrounding context
///
/// Patterns are compiled once at construction, so a term with invalid
/// regex syntax is rejected before any row is scanned and extraction
/// itself cannot fail.
pub struct ContextExtractor {
    patterns: Vec<CompiledPattern>,
    context_type: ContextType,
    context_count: usize,
}

impl ContextExtractor {
    /// Compile `terms` and build an extractor
    ///
    /// Fails with [`ExtractError::InvalidPattern`](crate::ExtractError) if
    /// a term marked `use_regex` does not compile; no partial results.
    pub fn new(
        terms: &[SearchTerm],
        context_type: ContextType,
        context_count: usize,
    ) -> Result<Self> {
        Ok(Self {
            patterns: compile_terms(terms)?,
            context_type,
            context_count,
        })
    }

    /// Granularity context windows are measured in
    pub fn context_type(&self) -> ContextType {
        self.context_type
    }

    /// Number of context units kept on either side of a match
    pub fn context_count(&self) -> usize {
        self.context_count
    }

    /// Scan `rows` in order and return one output row per match
    ///
    /// `document_field` names the field holding the document text; a
    /// non-string value is stringified and an absent field reads as empty
    /// text. Output rows carry the input fields (document field replaced
    /// by the extracted context) plus `source_doc`, `match`, `match_idx`
    /// and `context_idx`, the last three renamed with trailing underscores
    /// where the input already uses the name. `progress` is notified once
    /// per row, after that row's matches are computed. Rows without
    /// matches contribute nothing.
    pub fn extract<P: ProgressSink>(
        &self,
        rows: &[Row],
        document_field: &str,
        progress: &P,
    ) -> Vec<Row> {
        let columns = OutputColumns::resolve(rows);
        let total = rows.len();
        let mut out = Vec::new();
        for (row_idx, row) in rows.iter().enumerate() {
            self.scan_row(row, row_idx, document_field, &columns, &mut out);
            progress.on_document(row_idx + 1, total);
        }
        out
    }

    /// Parallel variant of [`extract`](Self::extract)
    ///
    /// Rows are scanned on the rayon thread pool; output comes back in
    /// input row order. Progress counts stay monotonic but arrive in
    /// nondeterministic row order.
    #[cfg(feature = "parallel")]
    pub fn extract_parallel<P: ProgressSink + Sync>(
        &self,
        rows: &[Row],
        document_field: &str,
        progress: &P,
    ) -> Vec<Row> {
        let columns = OutputColumns::resolve(rows);
        let total = rows.len();
        let processed = AtomicUsize::new(0);
        let per_row: Vec<Vec<Row>> = rows
            .par_iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let mut matches = Vec::new();
                self.scan_row(row, row_idx, document_field, &columns, &mut matches);
                progress.on_document(processed.fetch_add(1, Ordering::SeqCst) + 1, total);
                matches
            })
            .collect();
        per_row.into_iter().flatten().collect()
    }

    fn scan_row(
        &self,
        row: &Row,
        row_idx: usize,
        document_field: &str,
        columns: &OutputColumns,
        out: &mut Vec<Row>,
    ) {
        let text = document_text(row, document_field);
        for pattern in &self.patterns {
            // Matches arrive in ascending start order within a pattern, so
            // byte-to-char translation can run incrementally.
            let mut chars = CharOffsets::new(&text);
            for m in pattern.matches(&text) {
                let match_start = chars.char_at(m.start());
                let match_end = match_start + m.as_str().chars().count();

                let (left, right) = if self.context_count == 0 {
                    (String::new(), String::new())
                } else {
                    let left_tokens = self.context_type.split(&text[..m.start()]);
                    let right_tokens = self.context_type.split(&text[m.end()..]);
                    let skip = left_tokens.len().saturating_sub(self.context_count);
                    let keep = self.context_count.min(right_tokens.len());
                    (left_tokens[skip..].concat(), right_tokens[..keep].concat())
                };

                let context_start = match_start - left.chars().count();
                let context_end = match_end + right.chars().count();

                let mut output = row.clone();
                output.set(
                    document_field,
                    Value::from(format!("{left}{}{right}", m.as_str())),
                );
                output.set(SOURCE_DOC_COL, Value::from(row_idx));
                output.set(columns.match_col.as_str(), Value::from(m.as_str()));
                output.set(
                    columns.match_idx_col.as_str(),
                    Value::from(format_offsets(match_start, match_end)),
                );
                output.set(
                    columns.context_idx_col.as_str(),
                    Value::from(format_offsets(context_start, context_end)),
                );
                out.push(output);
            }
        }
    }
}

/// String value of the document field: strings verbatim, other values in
/// their compact JSON rendering, an absent field as empty text
fn document_text(row: &Row, document_field: &str) -> String {
    match row.get(document_field) {
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

/// Offset pair in the contractual `"(start,end)"` form, no spaces
fn format_offsets(start: usize, end: usize) -> String {
    format!("({start},{end})")
}

/// Incremental byte-to-char offset translation for ascending positions
struct CharOffsets<'t> {
    text: &'t str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'t> CharOffsets<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    fn char_at(&mut self, byte_offset: usize) -> usize {
        debug_assert!(byte_offset >= self.byte_pos);
        self.char_pos += self.text[self.byte_pos..byte_offset].chars().count();
        self.byte_pos = byte_offset;
        self.char_pos
    }
}
