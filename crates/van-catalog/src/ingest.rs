//! Raw document shapes and legacy-field reconciliation.
//!
//! The raw types accept every field spelling that has ever shipped in the
//! catalogue JSON; reconciliation folds them into the canonical model.
//! Because the search rubric scores each safety entry independently, legacy
//! safety lists are concatenated rather than picked first-wins, so every entry
//! that used to match keeps matching.

use std::collections::BTreeMap;

use serde::Deserialize;

use van_core::catalog::Catalog;
use van_core::entities::{ImageManifest, RequiredImage, System, Task};
use van_core::enums::DeclaredStatus;

use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct RawSystem {
    id: String,
    #[serde(default)]
    name: Option<String>,
    /// Legacy spelling of `name`.
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    /// Legacy key-facts list, folded into `description` when it is absent.
    #[serde(default)]
    bullets: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    safety_notes: Vec<String>,
    /// Legacy spellings of `safety_notes`.
    #[serde(default)]
    safety: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    verification_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "system")]
    system_id: Option<String>,
    #[serde(default)]
    linked_system_ids: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    safety_warnings: Vec<String>,
    /// Legacy spelling of `safety_warnings`.
    #[serde(default)]
    safety_notes: Vec<String>,
}

fn parse_declared_status(
    id: &str,
    raw: Option<String>,
) -> Result<Option<DeclaredStatus>, CatalogError> {
    let Some(value) = raw else { return Ok(None) };
    match value.replace('_', "-").as_str() {
        "owner-confirmed" => Ok(Some(DeclaredStatus::OwnerConfirmed)),
        "manual-verified" => Ok(Some(DeclaredStatus::ManualVerified)),
        // Historic "not verified yet" spellings mean no declaration.
        "" | "unverified" | "pending" => Ok(None),
        _ => Err(CatalogError::UnknownStatus {
            id: id.to_string(),
            value,
        }),
    }
}

fn reconcile_system(raw: RawSystem) -> Result<System, CatalogError> {
    let RawSystem {
        id,
        name,
        title,
        description,
        bullets,
        category,
        icon,
        synonyms,
        safety_notes,
        safety,
        warnings,
        verification_status,
    } = raw;

    if name.is_none() && title.is_some() {
        tracing::debug!(system = %id, "reconciling legacy 'title' field into 'name'");
    }
    let name = name.or(title).unwrap_or_default();
    let description = description.unwrap_or_else(|| bullets.join(". "));

    let mut notes = safety_notes;
    notes.extend(safety);
    notes.extend(warnings);

    let declared_status = parse_declared_status(&id, verification_status)?;

    Ok(System {
        id,
        name,
        description,
        category: category.unwrap_or_default(),
        icon,
        synonyms,
        safety_notes: notes,
        declared_status,
    })
}

fn reconcile_task(raw: RawTask) -> Task {
    let RawTask {
        id,
        title,
        system_id,
        linked_system_ids,
        keywords,
        steps,
        safety_warnings,
        safety_notes,
    } = raw;

    if !safety_notes.is_empty() {
        tracing::debug!(task = %id, "reconciling legacy 'safety_notes' entries into 'safety_warnings'");
    }
    let mut warnings = safety_warnings;
    warnings.extend(safety_notes);

    Task {
        id,
        title: title.unwrap_or_default(),
        system_id: system_id.unwrap_or_default(),
        linked_system_ids,
        keywords,
        steps,
        safety_warnings: warnings,
    }
}

/// Parse and reconcile the two catalogue documents into a validated
/// [`Catalog`].
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed documents,
/// [`CatalogError::UnknownStatus`] for an unrecognized verification status,
/// or [`CatalogError::Core`] when canonical validation rejects a record.
pub fn parse_catalog(systems_json: &str, tasks_json: &str) -> Result<Catalog, CatalogError> {
    let raw_systems: Vec<RawSystem> = serde_json::from_str(systems_json)?;
    let raw_tasks: Vec<RawTask> = serde_json::from_str(tasks_json)?;

    let systems = raw_systems
        .into_iter()
        .map(reconcile_system)
        .collect::<Result<Vec<_>, _>>()?;
    let tasks = raw_tasks.into_iter().map(reconcile_task).collect();

    let catalog = Catalog::new(systems, tasks)?;
    tracing::info!(
        systems = catalog.systems().len(),
        tasks = catalog.tasks().len(),
        "catalogue loaded"
    );
    Ok(catalog)
}

/// Parse the required-images manifest document.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed documents or
/// [`CatalogError::EmptyImagePath`] when an entry declares no path.
pub fn parse_manifest(json: &str) -> Result<ImageManifest, CatalogError> {
    let entries: BTreeMap<String, Vec<RequiredImage>> = serde_json::from_str(json)?;
    for (feature, images) in &entries {
        for image in images {
            if image.path.is_empty() {
                return Err(CatalogError::EmptyImagePath {
                    feature: feature.clone(),
                });
            }
        }
    }
    tracing::info!(features = entries.len(), "image manifest loaded");
    Ok(ImageManifest::new(entries))
}
