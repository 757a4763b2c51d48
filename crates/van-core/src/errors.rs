//! Cross-cutting error types for Vanguide.
//!
//! This module defines the load-time validation errors shared across the
//! workspace. Domain-specific errors (e.g., `CatalogError`, `ProbeError`)
//! are defined in their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Vanguide crate.
///
/// Validation failures are raised once, when a catalogue is constructed.
/// Query-time code assumes pre-validated input and never re-checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record is missing a required string field (or it is empty).
    #[error("validation error: {kind} record '{id}' is missing required field '{field}'")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    /// Two records of the same kind share an id.
    #[error("validation error: duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
