//! Conversions between the generic request types and Gemini wire types.

use crate::gemini::GeminiResult;
use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData,
    InlineDataPart, Part, TextPart,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use kaizen_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use kaizen_error::{GeminiError, GeminiErrorKind};

/// Builds the `generateContent` request body from a generic request.
///
/// System messages become the `system_instruction`; everything else is
/// flattened into a single user turn, preserving part order.
pub fn to_wire_request(request: &GenerateRequest) -> GenerateContentRequest {
    let mut system_parts = Vec::new();
    let mut user_parts = Vec::new();

    for message in &request.messages {
        let bucket = match message.role {
            Role::System => &mut system_parts,
            Role::User => &mut user_parts,
        };
        for input in &message.content {
            bucket.push(to_wire_part(input));
        }
    }

    let system_instruction = (!system_parts.is_empty()).then(|| Content {
        role: None,
        parts: system_parts,
    });

    let generation_config = (request.temperature.is_some() || request.max_tokens.is_some()).then(
        || GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    );

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: user_parts,
        }],
        system_instruction,
        generation_config,
    }
}

fn to_wire_part(input: &Input) -> Part {
    match input {
        Input::Text(text) => Part::Text(TextPart { text: text.clone() }),
        Input::Image { mime, source } => inline_part(mime.as_deref().unwrap_or("image/jpeg"), source),
        Input::Video { mime, source } => inline_part(mime.as_deref().unwrap_or("video/mp4"), source),
    }
}

fn inline_part(mime: &str, source: &MediaSource) -> Part {
    let data = match source {
        MediaSource::Base64(encoded) => encoded.clone(),
        MediaSource::Binary(bytes) => STANDARD.encode(bytes),
    };
    Part::InlineData(InlineDataPart {
        inline_data: InlineData {
            mime_type: mime.to_string(),
            data,
        },
    })
}

/// Converts a wire response into the generic response.
///
/// A blocked prompt or a candidate with no text is reported as an
/// empty-response error; callers decide what to substitute.
pub fn from_wire_response(response: GenerateContentResponse) -> GeminiResult<GenerateResponse> {
    if let Some(feedback) = &response.prompt_feedback
        && feedback.block_reason.is_some()
    {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    let text = response.text();
    if text.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    Ok(GenerateResponse {
        outputs: vec![Output::Text(text)],
    })
}
