//! Google Gemini API integration.

mod client;
pub mod conversion;
pub mod dto;

pub use client::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, GeminiClient};

use kaizen_error::GeminiError;

/// Result type for Gemini-specific operations.
pub type GeminiResult<T> = std::result::Result<T, GeminiError>;
