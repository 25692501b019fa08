//! Concordance-style context extraction over tabular document collections
//!
//! Concord scans a sequence of rows for occurrences of search terms and
//! emits one output row per match, carrying the originating row's fields,
//! the matched text, a bounded context window (measured in characters,
//! words or lines) and exact character-offset ranges for both.
//!
//! ```
//! use concord_core::{extract_context, ContextType, NoProgress, Row, SearchTerm, Value};
//!
//! let rows: Vec<Row> = vec![
//!     [("doc".to_string(), Value::from("The quick brown fox"))]
//!         .into_iter()
//!         .collect(),
//! ];
//! let out = extract_context(
//!     &rows,
//!     "doc",
//!     &[SearchTerm::literal("quick")],
//!     ContextType::Words,
//!     1,
//!     &NoProgress,
//! )
//! .unwrap();
//!
//! assert_eq!(out[0].get("doc"), Some(&Value::from("The quick brown ")));
//! assert_eq!(out[0].get("match_idx"), Some(&Value::from("(4,9)")));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod extractor;
pub mod pattern;
pub mod row;
pub mod term;
pub mod tokenize;

pub use error::{ExtractError, Result};
pub use extractor::{ContextExtractor, NoProgress, ProgressSink};
pub use row::{Row, Value};
pub use term::SearchTerm;
pub use tokenize::ContextType;

/// Extract context for `terms` over `rows` in one call
///
/// Convenience wrapper over [`ContextExtractor`]; see its documentation
/// for the full contract. Pattern compilation happens up front, so an
/// invalid pattern rejects the whole call before any row is scanned.
pub fn extract_context<P: ProgressSink>(
    rows: &[Row],
    document_field: &str,
    terms: &[SearchTerm],
    context_type: ContextType,
    context_count: usize,
    progress: &P,
) -> Result<Vec<Row>> {
    let extractor = ContextExtractor::new(terms, context_type, context_count)?;
    Ok(extractor.extract(rows, document_field, progress))
}
