//! Remote generation backends.
//!
//! Currently one backend: the Google Gemini `generateContent` REST API,
//! spoken directly over `reqwest` because the analysis requests are
//! multimodal-first (interleaved text and inline image/video parts).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod gemini;

pub use gemini::{GeminiClient, GeminiResult};
