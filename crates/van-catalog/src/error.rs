//! Ingestion error types.

use thiserror::Error;

use van_core::errors::CoreError;

/// Errors raised while loading or reconciling catalogue documents.
///
/// None of these are recoverable by the core: the loader surfaces them and
/// the host aborts initialization.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A document file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid JSON or has the wrong shape.
    #[error("malformed catalogue document: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed canonical validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A system declares a verification status the model does not know.
    #[error("unknown verification status '{value}' on system '{id}'")]
    UnknownStatus { id: String, value: String },

    /// A manifest entry declares an image with an empty path.
    #[error("empty image path in manifest entry for feature '{feature}'")]
    EmptyImagePath { feature: String },
}
