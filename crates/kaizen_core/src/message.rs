//! Message types for generation requests.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A multimodal message in a request.
///
/// # Examples
///
/// ```
/// use kaizen_core::{Input, Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: vec![Input::Text("Analyze this footage.".to_string())],
/// };
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message (can be multimodal)
    pub content: Vec<Input>,
}
