//! Query normalization.

/// Minimum normalized query length (in chars) for a search to run.
///
/// The hosting UI suppresses the search dropdown below this threshold, but
/// the engine enforces it too so the property is independently testable.
pub const MIN_QUERY_CHARS: usize = 2;

/// A trimmed, lower-cased query with its whitespace-delimited words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    full: String,
    words: Vec<String>,
}

impl NormalizedQuery {
    /// Normalize a raw query string.
    ///
    /// Returns `None` when the trimmed query is shorter than
    /// [`MIN_QUERY_CHARS`] chars; the caller maps this to an empty result,
    /// deterministically.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let full = raw.trim().to_lowercase();
        if full.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        let words = full.split_whitespace().map(String::from).collect();
        Some(Self { full, words })
    }

    /// The full normalized query.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Whitespace-delimited words of the normalized query.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
