//! Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ordered conversation contents (one user turn for a one-shot run)
    pub contents: Vec<Content>,
    /// System instruction, kept separate from user content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Sampling configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One content turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Role ("user", "model"); omitted for the system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    pub parts: Vec<Part>,
}

/// Content part (text or inline data).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline binary content (images, video)
    InlineData(InlineDataPart),
}

/// Text content part.
#[derive(Debug, Clone, Serialize)]
pub struct TextPart {
    /// The text
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// The wrapped inline data
    pub inline_data: InlineData,
}

/// Inline data with MIME type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the content
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Sampling configuration.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates, if any
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback when the prompt itself was blocked
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Why generation stopped ("STOP", "SAFETY", ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of one candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Response parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One response part.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    /// Text content, when present
    #[serde(default)]
    pub text: Option<String>,
}

/// Prompt-level feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason, when the prompt was refused
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
