//! Request and response types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A text generation request.
///
/// # Examples
///
/// ```
/// use campus_chat_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     temperature: Some(0.0),
///     max_tokens: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The prompt messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 for deterministic output)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Build a request from a system instruction and a user instruction.
    pub fn from_parts(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system), Message::user(user)],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// The response object returned by a model backend.
///
/// # Examples
///
/// ```
/// use campus_chat_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "Hello! How can I help?".to_string(),
/// };
///
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}
