//! The analysis report returned by the remote service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed analysis: verbatim Markdown plus its creation time.
///
/// The markdown is handed back exactly as the remote service produced it.
/// A new run replaces the previous report wholesale; nothing is merged or
/// persisted beyond the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The report body, unmodified
    pub markdown: String,
    /// When this report was produced
    pub created_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Create a report stamped with the current time.
    pub fn now(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            created_at: Utc::now(),
        }
    }
}
