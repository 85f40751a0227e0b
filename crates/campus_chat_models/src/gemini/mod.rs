//! Google Gemini provider.

mod client;

pub use client::GeminiClient;

use campus_chat_error::GeminiError;

/// Result type for Gemini-internal operations.
pub(crate) type GeminiResult<T> = std::result::Result<T, GeminiError>;
