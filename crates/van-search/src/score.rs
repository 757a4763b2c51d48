//! The hand-tuned scoring rubric.
//!
//! Case-insensitive substring containment throughout. Scores accumulate
//! additively across fields with no per-category cap: a record with many
//! low-weight safety-note hits can outscore a single title hit. This mirrors
//! the observed behavior of the shipped rubric and is kept deliberately.

use van_core::entities::{System, Task};

use crate::query::NormalizedQuery;

/// Full-query match in a system name or task title.
pub const FULL_MATCH_NAME: u32 = 10;
/// Per-word match in a system name or task title.
pub const WORD_MATCH_NAME: u32 = 3;
/// Full-query match in a system description.
pub const FULL_MATCH_DESCRIPTION: u32 = 5;
/// Full-query match in a system category.
pub const FULL_MATCH_CATEGORY: u32 = 6;
/// Full-query match in a synonym or keyword entry.
pub const FULL_MATCH_SYNONYM: u32 = 8;
/// Per-word match in a synonym or keyword entry.
pub const WORD_MATCH_SYNONYM: u32 = 4;
/// Full-query match in a step, safety-note, or safety-warning entry.
pub const FULL_MATCH_BODY: u32 = 2;

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Score for the name/title field: full-query hit plus per-word hits.
fn score_name_field(name: &str, query: &NormalizedQuery) -> u32 {
    let mut score = 0;
    if contains(name, query.full()) {
        score += FULL_MATCH_NAME;
    }
    for word in query.words() {
        if contains(name, word) {
            score += WORD_MATCH_NAME;
        }
    }
    score
}

/// Score for a synonym/keyword list: full-query and per-word hits per entry.
fn score_synonym_list(entries: &[String], query: &NormalizedQuery) -> u32 {
    let mut score = 0;
    for entry in entries {
        if contains(entry, query.full()) {
            score += FULL_MATCH_SYNONYM;
        }
        for word in query.words() {
            if contains(entry, word) {
                score += WORD_MATCH_SYNONYM;
            }
        }
    }
    score
}

/// Score for body-text lists (steps, safety notes/warnings): full-query only.
#[allow(clippy::cast_possible_truncation)]
fn score_body_list(entries: &[String], query: &NormalizedQuery) -> u32 {
    entries
        .iter()
        .filter(|entry| contains(entry, query.full()))
        .count() as u32
        * FULL_MATCH_BODY
}

/// Relevance score for a system record. Zero means "no match".
#[must_use]
pub fn score_system(system: &System, query: &NormalizedQuery) -> u32 {
    let mut score = score_name_field(&system.name, query);
    if contains(&system.description, query.full()) {
        score += FULL_MATCH_DESCRIPTION;
    }
    if contains(&system.category, query.full()) {
        score += FULL_MATCH_CATEGORY;
    }
    score += score_synonym_list(&system.synonyms, query);
    score += score_body_list(&system.safety_notes, query);
    score
}

/// Relevance score for a task record. Zero means "no match".
#[must_use]
pub fn score_task(task: &Task, query: &NormalizedQuery) -> u32 {
    let mut score = score_name_field(&task.title, query);
    score += score_synonym_list(&task.keywords, query);
    score += score_body_list(&task.steps, query);
    score += score_body_list(&task.safety_warnings, query);
    score
}
