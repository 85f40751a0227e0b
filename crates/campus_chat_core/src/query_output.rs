//! Structured output contract for query synthesis.

use serde::{Deserialize, Serialize};

/// The single-field record the query model must emit.
///
/// The query model is constrained to respond with a JSON object of exactly this
/// shape; a response that does not deserialize into it is a model-service
/// failure, not free text to be guessed at.
///
/// # Examples
///
/// ```
/// use campus_chat_core::QueryOutput;
///
/// let output: QueryOutput =
///     serde_json::from_str(r#"{"query": "SELECT 1"}"#).unwrap();
/// assert_eq!(output.query, "SELECT 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutput {
    /// Syntactically valid SQL query text
    pub query: String,
}
