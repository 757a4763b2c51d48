//! File-based document loading.

use std::path::Path;

use van_core::catalog::Catalog;
use van_core::entities::ImageManifest;

use crate::error::CatalogError;
use crate::ingest::{parse_catalog, parse_manifest};

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load and reconcile the catalogue from its two JSON documents.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when a file cannot be read, otherwise the
/// errors of [`parse_catalog`].
pub fn load_catalog(systems_path: &Path, tasks_path: &Path) -> Result<Catalog, CatalogError> {
    let systems = read(systems_path)?;
    let tasks = read(tasks_path)?;
    parse_catalog(&systems, &tasks)
}

/// Load the required-images manifest from its JSON document.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read, otherwise the
/// errors of [`parse_manifest`].
pub fn load_manifest(path: &Path) -> Result<ImageManifest, CatalogError> {
    parse_manifest(&read(path)?)
}
