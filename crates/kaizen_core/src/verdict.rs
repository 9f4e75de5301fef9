//! Admission verdicts produced by the ingestion gate.

use crate::MediaAsset;
use serde::{Deserialize, Serialize};

/// Why a candidate file was refused admission.
///
/// The display form is the stable identifier surfaced to callers.
///
/// # Examples
///
/// ```
/// use kaizen_core::RejectReason;
///
/// assert_eq!(format!("{}", RejectReason::NotVideo), "rejected-not-video");
/// assert_eq!(format!("{}", RejectReason::Oversize), "rejected-oversize");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum RejectReason {
    /// Declared type is not a video container
    #[display("rejected-not-video")]
    NotVideo,
    /// Byte size exceeds the processing ceiling
    #[display("rejected-oversize")]
    Oversize,
    /// Playable duration exceeds the duration ceiling
    #[display("rejected-overduration")]
    Overduration,
    /// Duration could not be determined from metadata
    #[display("rejected-duration-unknown")]
    DurationUnknown,
}

/// A single refused file, reported back to the caller by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Original filename of the refused candidate
    pub filename: String,
    /// Why it was refused
    pub reason: RejectReason,
}

/// Per-candidate outcome of the ingestion gate.
#[derive(Debug, Clone)]
pub enum ValidationVerdict {
    /// Admitted into the pipeline with a probed duration and preview handle
    Accepted(MediaAsset),
    /// Refused with a user-reportable reason
    Rejected(Rejection),
}

impl ValidationVerdict {
    /// True if the candidate was admitted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted(_))
    }
}
