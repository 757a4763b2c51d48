//! The injected existence-probe seam.
//!
//! In a browser host this would be an image-load probe; here the shipped
//! implementation is a filesystem check. The gate has no opinion on the
//! mechanism; anything implementing [`ExistsProbe`] works, including test
//! fakes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::ProbeError;

/// Asynchronous existence check for an opaque image path.
///
/// Implementations must resolve rather than hang: no timeout is intrinsic
/// to the gate, so a probe that never completes stalls validation.
#[async_trait]
pub trait ExistsProbe: Send + Sync {
    /// Whether the resource at `path` exists.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the check itself fails. Callers inside
    /// the gate treat that as "does not exist".
    async fn exists(&self, path: &str) -> Result<bool, ProbeError>;
}

/// Filesystem existence probe rooted at an asset directory.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ExistsProbe for FsProbe {
    async fn exists(&self, path: &str) -> Result<bool, ProbeError> {
        Ok(tokio::fs::try_exists(self.root.join(path)).await?)
    }
}

/// Memoizing wrapper around another probe.
///
/// Image paths are assumed immutable once deployed, so a successful probe
/// result holds for the lifetime of this value. Errors are not cached: a
/// transient failure on one call may succeed on the next.
pub struct CachedProbe<P> {
    inner: P,
    cache: Mutex<HashMap<String, bool>>,
}

impl<P: ExistsProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<P: ExistsProbe> ExistsProbe for CachedProbe<P> {
    async fn exists(&self, path: &str) -> Result<bool, ProbeError> {
        if let Some(&hit) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            return Ok(hit);
        }

        let found = self.inner.exists(path).await?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), found);
        Ok(found)
    }
}
