//! The relevance index: query-time scoring over a borrowed catalogue.

use serde::Serialize;

use van_core::catalog::Catalog;
use van_core::entities::{System, Task};

use crate::query::NormalizedQuery;
use crate::score::{score_system, score_task};

/// Kind tag for a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    System,
    Task,
}

/// Borrowed reference to a matched catalogue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordRef<'a> {
    System(&'a System),
    Task(&'a Task),
}

impl RecordRef<'_> {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::System(s) => &s.id,
            Self::Task(t) => &t.id,
        }
    }

    /// Display label: system name or task title.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::System(s) => &s.name,
            Self::Task(t) => &t.title,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::System(_) => RecordKind::System,
            Self::Task(_) => RecordKind::Task,
        }
    }
}

/// A matched record with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub record: RecordRef<'a>,
    pub score: u32,
}

/// Search tuning options.
///
/// Truncation is a presentation decision, not a core contract: the engine
/// defaults to returning every match and leaves capping to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits to return. `None` means unlimited.
    pub max_results: Option<usize>,
}

/// Relevance search over a borrowed, pre-validated catalogue.
///
/// Rebuild (cheap: this is just a borrow) whenever the underlying
/// catalogue changes. No external state, no interior mutability.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> RelevanceIndex<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Search with default options (unlimited results).
    ///
    /// Returns hits in descending score order; ties keep catalogue order
    /// (systems before tasks). Queries shorter than two normalized chars
    /// yield an empty result. Zero-scoring records are excluded entirely.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit<'a>> {
        self.search_with(query, &SearchOptions::default())
    }

    /// Search with explicit options.
    #[must_use]
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'a>> {
        let Some(normalized) = NormalizedQuery::parse(query) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit<'a>> = Vec::new();

        for system in self.catalog.systems() {
            let score = score_system(system, &normalized);
            if score > 0 {
                hits.push(SearchHit {
                    record: RecordRef::System(system),
                    score,
                });
            }
        }

        for task in self.catalog.tasks() {
            let score = score_task(task, &normalized);
            if score > 0 {
                hits.push(SearchHit {
                    record: RecordRef::Task(task),
                    score,
                });
            }
        }

        // Stable sort: equal scores keep catalogue order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(cap) = options.max_results {
            hits.truncate(cap);
        }
        hits
    }
}
