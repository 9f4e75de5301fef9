//! Media pipeline error types: probing, frame extraction, payload assembly.

/// Media-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// The ffprobe/ffmpeg binary could not be spawned
    #[display("Media tool not found: {}", _0)]
    ToolNotFound(String),
    /// Metadata probe exited with a failure status
    #[display("Metadata probe failed for {}: {}", filename, stderr)]
    ProbeFailed {
        /// Display name of the file being probed
        filename: String,
        /// Captured stderr from the probe process
        stderr: String,
    },
    /// Probe output could not be parsed
    #[display("Failed to parse probe output: {}", _0)]
    ProbeParse(String),
    /// Frame extraction failed for one asset; aborts that asset's run
    #[display("frame-extraction-failed: {}", filename)]
    FrameExtraction {
        /// Display name of the asset whose extraction failed
        filename: String,
    },
    /// Re-encoding a rendered frame failed
    #[display("Frame encode failed: {}", _0)]
    FrameEncode(String),
    /// Reading the source file failed
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Media error with source location tracking.
///
/// # Examples
///
/// ```
/// use kaizen_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::FrameExtraction {
///     filename: "line_a.mp4".to_string(),
/// });
/// assert!(format!("{}", err).contains("frame-extraction-failed: line_a.mp4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Convenience constructor for per-asset extraction failures.
    #[track_caller]
    pub fn frame_extraction(filename: impl Into<String>) -> Self {
        Self::new(MediaErrorKind::FrameExtraction {
            filename: filename.into(),
        })
    }
}
