//! Shared interface types.

use serde::{Deserialize, Serialize};

/// Static metadata describing a backend model's capabilities and limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Provider name
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Maximum input tokens
    pub max_input_tokens: u32,
    /// Maximum output tokens
    pub max_output_tokens: u32,
    /// Whether the model accepts image parts
    pub supports_vision: bool,
    /// Whether the model accepts inline video parts
    pub supports_video: bool,
}
