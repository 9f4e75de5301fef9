//! Admission policy for candidate files.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::join_all;
use kaizen_core::{MediaAsset, PreviewHandle, RejectReason, Rejection, ValidationVerdict};
use tracing::{debug, instrument, warn};

use crate::probe::{parse_duration, probe_media};

/// Outer bound on anything the pipeline will attempt to process at all.
pub const MAX_FILE_BYTES: u64 = 200 * 1024 * 1024;

/// Duration ceiling in seconds.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// A user-selected file before admission.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Path to the file contents
    pub path: PathBuf,
    /// Display name (original filename)
    pub name: String,
    /// Declared MIME type
    pub mime: String,
}

/// Size and duration ceilings for admission.
#[derive(Debug, Clone, Copy)]
pub struct GatePolicy {
    /// Maximum byte size
    pub max_bytes: u64,
    /// Maximum playable duration in seconds
    pub max_duration_secs: f64,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_FILE_BYTES,
            max_duration_secs: MAX_DURATION_SECS,
        }
    }
}

impl GatePolicy {
    /// Pure policy check. Returns the rejection reason, if any.
    ///
    /// `duration_secs` of None means the probe could not determine a
    /// duration; that is a rejection, never a silent acceptance.
    pub fn check(
        &self,
        mime: &str,
        size_bytes: u64,
        duration_secs: Option<f64>,
    ) -> Option<RejectReason> {
        if !mime.starts_with("video/") {
            return Some(RejectReason::NotVideo);
        }
        if size_bytes > self.max_bytes {
            return Some(RejectReason::Oversize);
        }
        match duration_secs {
            None => Some(RejectReason::DurationUnknown),
            Some(d) if d > self.max_duration_secs => Some(RejectReason::Overduration),
            Some(_) => None,
        }
    }
}

/// Result of admitting a multi-file selection.
///
/// One rejected file never blocks the admission of the others: the caller
/// receives every accepted asset plus a consolidated rejection list for
/// user-facing reporting.
#[derive(Debug, Default)]
pub struct AdmissionBatch {
    /// Admitted assets, in selection order
    pub accepted: Vec<MediaAsset>,
    /// Refused candidates with their reasons, in selection order
    pub rejected: Vec<Rejection>,
}

/// Validates candidate files against admission policy.
///
/// On acceptance the gate allocates a revocable preview handle for the
/// asset; the caller must release it when the asset is removed or
/// superseded.
#[derive(Debug)]
pub struct IngestionGate {
    policy: GatePolicy,
    next_preview_id: AtomicU64,
}

impl Default for IngestionGate {
    fn default() -> Self {
        Self::new(GatePolicy::default())
    }
}

impl IngestionGate {
    /// Create a gate with the given policy.
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            next_preview_id: AtomicU64::new(0),
        }
    }

    /// The policy this gate enforces.
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Validate one candidate.
    ///
    /// Checks the declared type and byte size first (both cheap), then
    /// probes duration by loading metadata only. Probe failure is treated
    /// as `rejected-duration-unknown`. The verdict for a given file is
    /// deterministic: admitting the same file twice yields the same
    /// outcome.
    #[instrument(skip(self), fields(name = %candidate.name))]
    pub async fn admit(&self, candidate: &FileCandidate) -> ValidationVerdict {
        // Type check before touching the filesystem.
        if !candidate.mime.starts_with("video/") {
            return self.reject(candidate, RejectReason::NotVideo);
        }

        let size_bytes = match tokio::fs::metadata(&candidate.path).await {
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!(error = %e, "could not stat candidate, treating as unprobeable");
                return self.reject(candidate, RejectReason::DurationUnknown);
            }
        };
        if size_bytes > self.policy.max_bytes {
            return self.reject(candidate, RejectReason::Oversize);
        }

        let duration_secs = match probe_media(&candidate.path, &candidate.name).await {
            Ok(probe) => parse_duration(&probe),
            Err(e) => {
                warn!(error = %e, "metadata probe failed");
                None
            }
        };

        match self.policy.check(&candidate.mime, size_bytes, duration_secs) {
            Some(reason) => self.reject(candidate, reason),
            None => {
                // check() only passes with a known duration
                let duration_secs = duration_secs.unwrap_or(0.0);
                let preview =
                    PreviewHandle::new(self.next_preview_id.fetch_add(1, Ordering::SeqCst));
                debug!(size_bytes, duration_secs, preview = preview.id(), "admitted");
                ValidationVerdict::Accepted(MediaAsset {
                    name: candidate.name.clone(),
                    mime: candidate.mime.clone(),
                    size_bytes,
                    duration_secs,
                    path: candidate.path.clone(),
                    preview,
                })
            }
        }
    }

    /// Validate a multi-file selection.
    ///
    /// Candidates are independent, so they are probed concurrently; the
    /// returned batch preserves selection order within each list.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn admit_batch(&self, candidates: &[FileCandidate]) -> AdmissionBatch {
        let verdicts = join_all(candidates.iter().map(|c| self.admit(c))).await;

        let mut batch = AdmissionBatch::default();
        for verdict in verdicts {
            match verdict {
                ValidationVerdict::Accepted(asset) => batch.accepted.push(asset),
                ValidationVerdict::Rejected(rejection) => batch.rejected.push(rejection),
            }
        }
        batch
    }

    fn reject(&self, candidate: &FileCandidate, reason: RejectReason) -> ValidationVerdict {
        debug!(%reason, "rejected");
        ValidationVerdict::Rejected(Rejection {
            filename: candidate.name.clone(),
            reason,
        })
    }
}
