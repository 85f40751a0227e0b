//! Message types for model prompts.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a prompt.
///
/// The pipeline is text-only: every prompt is a system instruction followed by
/// one user message.
///
/// # Examples
///
/// ```
/// use campus_chat_core::{Message, Role};
///
/// let message = Message::user("When is the next Mechatronics lab?");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
