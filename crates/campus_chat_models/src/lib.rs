//! LLM provider integration for campus-chat.
//!
//! One provider is wired in: Google Gemini, reached through the `gemini-rust`
//! SDK. The pipeline constructs two [`GeminiClient`] instances from the same
//! API key, one per sampling configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
