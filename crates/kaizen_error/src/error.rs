//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, MediaError, SessionError};

/// The foundation error enum for the Kaizen workspace.
///
/// # Examples
///
/// ```
/// use kaizen_error::{KaizenError, ConfigError};
///
/// let cfg_err = ConfigError::new("bad template table");
/// let err: KaizenError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum KaizenErrorKind {
    /// Media pipeline error (probe, gate, transcode)
    #[from(MediaError)]
    Media(MediaError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Analysis-session error (run preconditions)
    #[from(SessionError)]
    Session(SessionError),
}

/// Kaizen error with kind discrimination.
///
/// # Examples
///
/// ```
/// use kaizen_error::{KaizenResult, ConfigError};
///
/// fn might_fail() -> KaizenResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Kaizen Error: {}", _0)]
pub struct KaizenError(Box<KaizenErrorKind>);

impl KaizenError {
    /// Create a new error from a kind.
    pub fn new(kind: KaizenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KaizenErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to KaizenErrorKind
impl<T> From<T> for KaizenError
where
    T: Into<KaizenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Kaizen operations.
pub type KaizenResult<T> = std::result::Result<T, KaizenError>;
