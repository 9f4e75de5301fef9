//! Error types for the Kaizen video analysis library.
//!
//! This crate provides the foundation error types used throughout the Kaizen
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use kaizen_error::{KaizenResult, ConfigError};
//!
//! fn load_templates() -> KaizenResult<String> {
//!     Err(ConfigError::new("missing template table"))?
//! }
//!
//! match load_templates() {
//!     Ok(t) => println!("loaded: {}", t),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod media;
mod session;

pub use config::ConfigError;
pub use error::{KaizenError, KaizenErrorKind, KaizenResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use media::{MediaError, MediaErrorKind};
pub use session::{SessionError, SessionErrorKind};
