//! Input loading: glob resolution and row construction

pub mod glob_resolver;
pub mod reader;

pub use glob_resolver::resolve_patterns;
pub use reader::{jsonl_rows, text_rows, PATH_FIELD, TEXT_FIELD};
