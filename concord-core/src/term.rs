//! Search term value object

/// A single term to search for in documents
///
/// A term is either literal text or a regular expression, matched
/// case-sensitively unless `ignore_case` is set. Equality and hashing are
/// structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTerm {
    /// The text to search for
    pub text: String,
    /// Treat `text` as a regular expression rather than literal text
    pub use_regex: bool,
    /// Match case-insensitively
    pub ignore_case: bool,
}

impl SearchTerm {
    /// Create a literal, case-sensitive term
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_regex: false,
            ignore_case: false,
        }
    }

    /// Create a term whose text is a regular expression
    pub fn pattern(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_regex: true,
            ignore_case: false,
        }
    }

    /// Toggle case-insensitive matching
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
