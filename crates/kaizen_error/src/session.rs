//! Analysis-session error types.

/// Session-level error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// A run was requested while another run is still in flight
    #[display("a run is already in flight")]
    RunInFlight,
    /// A run was requested with no accepted assets selected
    #[display("no accepted assets selected")]
    NoAssets,
    /// A run was requested with an empty analysis context
    #[display("analysis context is empty")]
    MissingContext,
}

/// Session error with source location tracking.
///
/// # Examples
///
/// ```
/// use kaizen_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::NoAssets);
/// assert!(format!("{}", err).contains("no accepted assets"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
