//! # van-search
//!
//! Keyword relevance search over the Vanguide manual catalogue.
//!
//! A purely additive, substring-based rubric: no tokenized indexing, no
//! stemming. The catalogue is tens of records and fully resident in memory,
//! so correctness matters more than asymptotic performance:
//! - Name/title matches dominate the weight table
//! - Synonym/keyword matches rank second
//! - Body text (steps, safety notes) contributes low-weight hits
//!
//! [`RelevanceIndex::search`] is fully synchronous and never suspends; it is
//! a pure function over the borrowed catalogue.

pub mod index;
pub mod query;
pub mod score;

pub use index::{RecordKind, RecordRef, RelevanceIndex, SearchHit, SearchOptions};
pub use query::{MIN_QUERY_CHARS, NormalizedQuery};
