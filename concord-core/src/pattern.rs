//! Search term compilation

use crate::error::{ExtractError, Result};
use crate::term::SearchTerm;
use regex::{Match, Regex, RegexBuilder};

/// A search term compiled into an executable matcher
///
/// Literal terms are escaped before compilation; patterns compile as
/// written. Matching always lets `.` cross newlines, and is
/// case-insensitive only when the source term asks for it.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a single search term
    pub fn compile(term: &SearchTerm) -> Result<Self> {
        let source = if term.use_regex {
            term.text.clone()
        } else {
            regex::escape(&term.text)
        };
        let regex = RegexBuilder::new(&source)
            .dot_matches_new_line(true)
            .case_insensitive(term.ignore_case)
            .build()
            .map_err(|source| ExtractError::InvalidPattern {
                term: term.text.clone(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// Iterate all matches in `text`, overlapping allowed
    ///
    /// Matches come back in ascending start order. The scan resumes one
    /// character past each match start rather than at its end, so a match
    /// may begin inside the previous match's span.
    pub fn matches<'r, 't>(&'r self, text: &'t str) -> OverlappingMatches<'r, 't> {
        OverlappingMatches {
            regex: &self.regex,
            text,
            pos: 0,
        }
    }
}

/// Compile an ordered list of terms, preserving order
///
/// Order matters: it determines the emission order of matches when several
/// terms match the same span. Any compile failure aborts the whole batch.
pub fn compile_terms(terms: &[SearchTerm]) -> Result<Vec<CompiledPattern>> {
    terms.iter().map(CompiledPattern::compile).collect()
}

/// Iterator returned by [`CompiledPattern::matches`]
#[derive(Debug)]
pub struct OverlappingMatches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for OverlappingMatches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.text.len() {
            return None;
        }
        let m = self.regex.find_at(self.text, self.pos)?;
        // Advance by one character from the match start; empty matches at
        // the end of the text terminate the scan.
        self.pos = match self.text[m.start()..].chars().next() {
            Some(ch) => m.start() + ch.len_utf8(),
            None => self.text.len() + 1,
        };
        Some(m)
    }
}
