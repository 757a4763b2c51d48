//! Verification status enums for Vanguide.
//!
//! All enums use `kebab-case` serialization via `#[serde(rename_all = "kebab-case")]`,
//! matching the wire format of the catalogue JSON documents
//! (`"owner-confirmed"`, `"manual-verified"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeclaredStatus
// ---------------------------------------------------------------------------

/// Verification badge declared by the content curator for a feature.
///
/// A declared status is a claim, not a result: it only becomes visible when
/// the image-requirement gate confirms every required image is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DeclaredStatus {
    OwnerConfirmed,
    ManualVerified,
}

impl DeclaredStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwnerConfirmed => "owner-confirmed",
            Self::ManualVerified => "manual-verified",
        }
    }
}

impl fmt::Display for DeclaredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerificationStatus
// ---------------------------------------------------------------------------

/// Effective verification status for a feature, derived fresh on every
/// evaluation, never stored.
///
/// ```text
/// images incomplete ─────────────→ blocked
/// images complete, no declaration → pending
/// images complete + declaration ──→ owner_confirmed | manual_verified
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    Blocked,
    Pending,
    OwnerConfirmed,
    ManualVerified,
}

impl VerificationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Pending => "pending",
            Self::OwnerConfirmed => "owner-confirmed",
            Self::ManualVerified => "manual-verified",
        }
    }

    /// Whether this status may show a "verified" badge.
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::OwnerConfirmed | Self::ManualVerified)
    }
}

impl From<DeclaredStatus> for VerificationStatus {
    fn from(declared: DeclaredStatus) -> Self {
        match declared {
            DeclaredStatus::OwnerConfirmed => Self::OwnerConfirmed,
            DeclaredStatus::ManualVerified => Self::ManualVerified,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BlockReason
// ---------------------------------------------------------------------------

/// Machine-readable reason a feature's verification is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BlockReason {
    /// At least one declared image failed its existence probe.
    MissingRequiredImages,
    /// The feature declares no images at all: unverifiable by construction.
    NoImagesDeclared,
}

impl BlockReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredImages => "missing-required-images",
            Self::NoImagesDeclared => "no-images-declared",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
