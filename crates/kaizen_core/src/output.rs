//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// Supported output types from the remote model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output (the Markdown report body).
    Text(String),
}

impl Output {
    /// Borrow the text content, if this output is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
        }
    }
}
