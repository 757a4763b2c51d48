//! Per-feature image validation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use van_core::entities::{ImageManifest, RequiredImage};

use crate::probe::ExistsProbe;

/// A required image annotated with its probed existence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbedImage {
    #[serde(flatten)]
    pub image: RequiredImage,
    pub exists: bool,
}

/// Outcome of validating one feature's required images.
///
/// `required`, `missing`, and `existing` all preserve manifest order;
/// completion order of the underlying probes is irrelevant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureValidation {
    /// True iff the manifest is non-empty and nothing is missing. A feature
    /// with zero declared images can never be valid; it is unverifiable by
    /// construction, not vacuously complete.
    pub valid: bool,
    /// Every declared image with its existence flag, in manifest order.
    pub required: Vec<ProbedImage>,
    pub missing: Vec<RequiredImage>,
    pub existing: Vec<RequiredImage>,
}

impl FeatureValidation {
    /// Human-readable summary for status lines.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.required.is_empty() {
            "No images declared for this feature".to_string()
        } else if self.valid {
            "All required images present".to_string()
        } else {
            format!(
                "Missing {} of {} required images",
                self.missing.len(),
                self.required.len()
            )
        }
    }
}

/// Validate every required image for a feature.
///
/// Unknown feature ids resolve to an empty requirement list (not an error).
/// All paths are probed concurrently; a probe error or panicked probe task
/// counts as "does not exist": the gate fails closed, and nothing
/// propagates to the caller.
pub async fn validate_feature(
    feature_id: &str,
    manifest: &ImageManifest,
    probe: &Arc<dyn ExistsProbe>,
) -> FeatureValidation {
    let required = manifest.required_for(feature_id);
    if required.is_empty() {
        return FeatureValidation {
            valid: false,
            required: Vec::new(),
            missing: Vec::new(),
            existing: Vec::new(),
        };
    }

    let mut set = JoinSet::new();
    for (idx, image) in required.iter().enumerate() {
        let probe = Arc::clone(probe);
        let path = image.path.clone();
        set.spawn(async move {
            let exists = match probe.exists(&path).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "existence probe failed, treating image as missing");
                    false
                }
            };
            (idx, exists)
        });
    }

    // Missing slots stay false: a task that panicked counts as a failed probe.
    let mut exists_by_index = vec![false; required.len()];
    while let Some(res) = set.join_next().await {
        match res {
            Ok((idx, exists)) => exists_by_index[idx] = exists,
            Err(e) => tracing::warn!(error = %e, "existence probe task failed"),
        }
    }

    let probed: Vec<ProbedImage> = required
        .iter()
        .zip(&exists_by_index)
        .map(|(image, &exists)| ProbedImage {
            image: image.clone(),
            exists,
        })
        .collect();

    let missing: Vec<RequiredImage> = probed
        .iter()
        .filter(|p| !p.exists)
        .map(|p| p.image.clone())
        .collect();
    let existing: Vec<RequiredImage> = probed
        .iter()
        .filter(|p| p.exists)
        .map(|p| p.image.clone())
        .collect();

    FeatureValidation {
        valid: missing.is_empty(),
        required: probed,
        missing,
        existing,
    }
}

/// Whether a feature is allowed to carry a "verified" badge at all.
pub async fn can_be_verified(
    feature_id: &str,
    manifest: &ImageManifest,
    probe: &Arc<dyn ExistsProbe>,
) -> bool {
    validate_feature(feature_id, manifest, probe).await.valid
}
