//! # van-gate
//!
//! Image-requirement verification gate for Vanguide features.
//!
//! A feature's "owner-confirmed" or "manual-verified" badge is only valid if
//! every image its manifest declares actually exists. This crate:
//! - probes declared image paths through an injected [`ExistsProbe`]
//! - partitions results into missing/existing, preserving manifest order
//! - derives the effective [`van_core::enums::VerificationStatus`], never
//!   upgrading past the gate when images are incomplete
//!
//! The gate itself is stateless; memoization lives in the probe
//! implementation ([`CachedProbe`]), keeping validation trivially testable
//! with a fake probe. Probe failures are recovered locally as "does not
//! exist": the gate fails closed, never toward a false `valid`.

pub mod error;
pub mod probe;
pub mod status;
pub mod validate;

pub use error::ProbeError;
pub use probe::{CachedProbe, ExistsProbe, FsProbe};
pub use status::{StatusDecision, derive_status};
pub use validate::{FeatureValidation, ProbedImage, can_be_verified, validate_feature};
