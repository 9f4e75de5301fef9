//! Request payload types assembled by the transcoder.

use serde::{Deserialize, Serialize};

/// One sampled instant of a video: a re-encoded still plus its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePacket {
    /// Zero-padded `MM:SS` position of the sampled instant
    pub caption: String,
    /// JPEG-encoded frame bytes
    pub jpeg: Vec<u8>,
}

/// How one asset was folded into the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum AssetMode {
    /// Submitted whole as a single inline blob
    #[display("whole-file")]
    WholeFile,
    /// Converted into a bracketed, timestamped frame sequence
    #[display("image-sequence")]
    ImageSequence,
}

/// One ordered part of the outbound request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    /// Free text: sequence markers, timestamp captions, the final instruction
    Text(String),
    /// Self-describing binary content (a whole video or a single frame)
    InlineMedia {
        /// MIME type of the content
        mime: String,
        /// Raw bytes
        data: Vec<u8>,
    },
}

/// The assembled multimodal request body for one analysis run.
///
/// Parts appear in asset order: each asset contributes either a single inline
/// blob or a marker-bracketed frame sequence, and the final part is the user
/// instruction plus the generated asset manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPayload {
    /// Ordered request parts
    pub parts: Vec<PayloadPart>,
}

impl RequestPayload {
    /// Number of parts in the payload.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if no parts were assembled.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
