//! TPS video waste analysis.
//!
//! A library for analyzing manufacturing footage against the Toyota
//! Production System waste taxonomy. Selected video files pass through an
//! admission gate (type, size, probed duration), get folded into a
//! multimodal request (small files inline and whole, large files as a
//! bounded timestamped frame sequence), and are submitted once to a
//! generative backend that returns an unstructured Markdown report.
//!
//! # Examples
//!
//! ```no_run
//! use kaizen::{AnalysisSession, GeminiClient, DEFAULT_MODEL};
//! use kaizen_media::FileCandidate;
//! use std::sync::Arc;
//!
//! # async fn demo() -> kaizen_error::KaizenResult<()> {
//! let driver = Arc::new(GeminiClient::new(DEFAULT_MODEL)?);
//! let mut session = AnalysisSession::new(driver);
//!
//! session.set_context("Worker assembling engine part A");
//! let rejected = session
//!     .add_files(&[FileCandidate {
//!         path: "line_a.mp4".into(),
//!         name: "line_a.mp4".into(),
//!         mime: "video/mp4".into(),
//!     }])
//!     .await;
//! assert!(rejected.is_empty());
//!
//! let report = session.run().await?;
//! println!("{}", report.markdown);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod report;
mod session;
pub mod templates;

pub use config::{AnalysisSettings, KaizenConfig, ModelEntry};
pub use report::Category;
pub use session::AnalysisSession;

pub use kaizen_core::{
    AnalysisReport, AssetSummary, Language, MediaAsset, PreviewHandle, RejectReason, Rejection,
    RunStatus,
};
pub use kaizen_error::{KaizenError, KaizenErrorKind, KaizenResult};
pub use kaizen_interface::{KaizenDriver, Video, Vision};
pub use kaizen_media::{
    FileCandidate, GatePolicy, IngestionGate, Transcoder, INLINE_THRESHOLD_BYTES, MAX_DURATION_SECS,
    MAX_FILE_BYTES,
};
pub use kaizen_models::GeminiClient;
pub use kaizen_models::gemini::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
