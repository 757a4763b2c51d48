//! Probe error types for van-gate.

/// Errors an existence probe may raise.
///
/// The gate recovers from every variant by treating the probed path as
/// missing; these exist so probe implementations can report what actually
/// went wrong to logs.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Filesystem-level failure (permission, broken mount, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The probe's backing store is unreachable.
    #[error("probe backend unavailable: {0}")]
    Unavailable(String),
}
