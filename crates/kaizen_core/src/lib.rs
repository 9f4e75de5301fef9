//! Core data types for the Kaizen video analysis library.
//!
//! This crate provides the foundation data types used across the Kaizen
//! workspace: multimodal request/response types, the media asset lifecycle
//! types tracked through admission and transcoding, and the per-run state
//! machine observed by callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod input;
mod language;
mod media;
mod message;
mod output;
mod payload;
mod report;
mod request;
mod role;
mod status;
mod verdict;

pub use asset::{AssetSummary, MediaAsset, PreviewHandle};
pub use input::Input;
pub use language::Language;
pub use media::MediaSource;
pub use message::Message;
pub use output::Output;
pub use payload::{AssetMode, FramePacket, PayloadPart, RequestPayload};
pub use report::AnalysisReport;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use status::RunStatus;
pub use verdict::{RejectReason, Rejection, ValidationVerdict};
