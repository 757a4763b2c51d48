//! Verification status derivation.

use serde::{Deserialize, Serialize};

use van_core::enums::{BlockReason, DeclaredStatus, VerificationStatus};

use crate::validate::FeatureValidation;

/// The derived, display-ready verification state for a feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusDecision {
    pub status: VerificationStatus,
    /// Machine-readable reason when `status` is blocked.
    pub reason: Option<BlockReason>,
    /// What the curator declared, carried through for display. Never
    /// upgrades `status` past a failed validation.
    pub declared: Option<DeclaredStatus>,
}

/// Derive the effective status from an image validation and the declared
/// badge.
///
/// An incomplete validation always yields [`VerificationStatus::Blocked`],
/// regardless of declaration; a complete one passes the declared status
/// through, defaulting to pending when nothing was declared.
#[must_use]
pub fn derive_status(
    validation: &FeatureValidation,
    declared: Option<DeclaredStatus>,
) -> StatusDecision {
    if !validation.valid {
        let reason = if validation.required.is_empty() {
            BlockReason::NoImagesDeclared
        } else {
            BlockReason::MissingRequiredImages
        };
        return StatusDecision {
            status: VerificationStatus::Blocked,
            reason: Some(reason),
            declared,
        };
    }

    StatusDecision {
        status: declared.map_or(VerificationStatus::Pending, VerificationStatus::from),
        reason: None,
        declared,
    }
}
