//! Media asset lifecycle types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A revocable local preview handle allocated when an asset is admitted.
///
/// The handle stands in for whatever display resource the caller attached to
/// the asset (an object URL, a decoded poster frame). Release is idempotent:
/// exactly one call observes the transition, no matter how many times or from
/// how many clones `release` is invoked.
///
/// # Examples
///
/// ```
/// use kaizen_core::PreviewHandle;
///
/// let handle = PreviewHandle::new(7);
/// assert!(handle.release());
/// assert!(!handle.release());
/// assert!(handle.is_released());
/// ```
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    id: u64,
    released: Arc<AtomicBool>,
}

impl PreviewHandle {
    /// Allocate a new live handle with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The handle's id, unique within one session.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Release the handle. Returns true only for the call that performed
    /// the release.
    pub fn release(&self) -> bool {
        !self.released.swap(true, Ordering::SeqCst)
    }

    /// Whether the handle has been released.
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

/// A user-selected video file admitted by the ingestion gate.
///
/// Assets are created only on acceptance, so the probed duration is always
/// known. The preview handle must be released when the asset is removed or
/// the selection list is replaced.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    /// Display name (the original filename)
    pub name: String,
    /// Declared MIME type, e.g. "video/mp4"
    pub mime: String,
    /// Binary size in bytes
    pub size_bytes: u64,
    /// Playable duration in seconds, discovered by the metadata probe
    pub duration_secs: f64,
    /// Path to the file contents on the local filesystem
    pub path: PathBuf,
    /// Revocable preview handle for display
    pub preview: PreviewHandle,
}

/// Serializable summary of an asset, used in logs and manifests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Display name
    pub name: String,
    /// Declared MIME type
    pub mime: String,
    /// Binary size in bytes
    pub size_bytes: u64,
    /// Probed duration in seconds
    pub duration_secs: f64,
}

impl MediaAsset {
    /// Summarize the asset for logging or manifest generation.
    pub fn summary(&self) -> AssetSummary {
        AssetSummary {
            name: self.name.clone(),
            mime: self.mime.clone(),
            size_bytes: self.size_bytes,
            duration_secs: self.duration_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_exactly_once_across_clones() {
        let handle = PreviewHandle::new(1);
        let clones: Vec<_> = (0..8).map(|_| handle.clone()).collect();

        let mut performed = 0;
        for c in &clones {
            if c.release() {
                performed += 1;
            }
        }
        if handle.release() {
            performed += 1;
        }

        assert_eq!(performed, 1);
        assert!(handle.is_released());
    }
}
