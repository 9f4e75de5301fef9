//! Ingestion gate and payload transcoder.
//!
//! This crate is the algorithmic core of the Kaizen pipeline. The
//! [`IngestionGate`] validates candidate files against admission policy
//! (type, size, probed duration) before anything else touches them. The
//! [`Transcoder`] then folds each admitted asset into the outbound request:
//! small files are inlined whole, large files are converted into a bounded
//! sequence of timestamped stills so the request stays under the remote
//! API's inline-payload ceiling.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod gate;
mod probe;
mod sample;
mod transcode;

pub use extract::{FfmpegFrameSource, FrameSource};
pub use gate::{
    AdmissionBatch, FileCandidate, GatePolicy, IngestionGate, MAX_DURATION_SECS, MAX_FILE_BYTES,
};
pub use probe::{ProbeFormat, ProbeOutput, ProbeStream, parse_duration, parse_resolution, probe_media};
pub use sample::{
    FRAME_CAP, JPEG_QUALITY, MAX_EDGE_PX, MIN_RATE_HZ, TARGET_RATE_HZ, format_timestamp,
    frame_instants, sampling_rate, target_dimensions,
};
pub use transcode::{INLINE_THRESHOLD_BYTES, Transcoder};
