//! Per-run state machine observed by callers.

use serde::{Deserialize, Serialize};

/// The state of one analysis run.
///
/// `Idle → Validating → Transcoding → Submitted → (Completed | Failed)`.
/// Failed is terminal for the run; a new run starts again from Idle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum RunStatus {
    /// No run in progress
    Idle,
    /// Candidate files are being checked against admission policy
    Validating,
    /// Accepted assets are being folded into the request payload
    Transcoding,
    /// The assembled request has been handed to the remote service
    Submitted,
    /// A report was produced (possibly a placeholder for an empty response)
    Completed,
    /// The run aborted; the caller must re-trigger from Idle
    Failed,
}

impl RunStatus {
    /// True while a run holds the single outstanding request slot.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            RunStatus::Validating | RunStatus::Transcoding | RunStatus::Submitted
        )
    }
}
