//! Context granularity and tokenizer strategies
//!
//! Each splitter returns contiguous subslices of its input whose
//! concatenation reconstructs the input exactly, so windowing can slice by
//! element count and reconstruct offsets from slice lengths. The one
//! exception: [`split_by_word`] yields nothing for whitespace-only input.

use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\s*\S+\s*").expect("word pattern compiles"))
}

fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| Regex::new(r".*?(?:\n|$)").expect("line pattern compiles"))
}

/// Unit in which context windows are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContextType {
    /// Single characters (code points)
    Characters,
    /// Whitespace-delimited words, surrounding whitespace attached
    Words,
    /// Newline-terminated lines
    Lines,
}

impl ContextType {
    /// All granularities, in declaration order
    pub const ALL: [ContextType; 3] =
        [ContextType::Characters, ContextType::Words, ContextType::Lines];

    /// Lowercase name of this granularity
    pub fn name(&self) -> &'static str {
        match self {
            ContextType::Characters => "characters",
            ContextType::Words => "words",
            ContextType::Lines => "lines",
        }
    }

    /// Split `text` with the tokenizer this granularity selects
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            ContextType::Characters => split_by_character(text),
            ContextType::Words => split_by_word(text),
            ContextType::Lines => split_by_line(text),
        }
    }
}

impl std::fmt::Display for ContextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ContextType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "characters" => Ok(ContextType::Characters),
            "words" => Ok(ContextType::Words),
            "lines" => Ok(ContextType::Lines),
            other => Err(format!("unknown context granularity: {other}")),
        }
    }
}

/// One element per character
pub fn split_by_character(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, ch)| &text[i..i + ch.len_utf8()])
        .collect()
}

/// One element per word, with adjacent whitespace attached
///
/// Elements are consecutive matches of `\s*\S+\s*`: inter-word whitespace
/// travels with the preceding word, leading whitespace with the first
/// word. Whitespace-only input yields no elements.
pub fn split_by_word(text: &str) -> Vec<&str> {
    word_pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// One element per line, including its trailing newline
///
/// The last line keeps no terminator when the input does not end in one,
/// and the match at end of input contributes a final empty element.
pub fn split_by_line(text: &str) -> Vec<&str> {
    line_pattern().find_iter(text).map(|m| m.as_str()).collect()
}
