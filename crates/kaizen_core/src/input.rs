//! Input types for multimodal generation requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types for a generation request.
///
/// # Examples
///
/// ```
/// use kaizen_core::{Input, MediaSource};
///
/// // Text input
/// let text = Input::Text("timestamp 00:05".to_string());
///
/// // Image input with raw bytes
/// let image = Input::Image {
///     mime: Some("image/jpeg".to_string()),
///     source: MediaSource::Binary(vec![0xFF, 0xD8]),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },

    /// Video input (MP4, WebM, AVI, etc.).
    Video {
        /// MIME type, e.g., "video/mp4" or "video/webm"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}
