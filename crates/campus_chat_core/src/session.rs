//! Per-request pipeline state.

use serde::{Deserialize, Serialize};

/// Transient state for one question, populated in pipeline order.
///
/// Created empty (apart from the question) at request start, each field is
/// filled by the corresponding pipeline step, and the whole record is dropped
/// once the answer has been rendered. Nothing persists across requests.
///
/// # Examples
///
/// ```
/// use campus_chat_core::Session;
///
/// let session = Session::new("which teacher teaches mechatronics");
/// assert!(session.query.is_empty());
/// assert!(session.answer.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Raw user question text
    pub question: String,
    /// Synthesized SQL query text
    pub query: String,
    /// Raw query output, or an execution error rendered as text
    pub result: String,
    /// Final natural-language answer
    pub answer: String,
}

impl Session {
    /// Create a fresh session for a question.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            query: String::new(),
            result: String::new(),
            answer: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty() {
        let session = Session::new("when is the AI lab?");
        assert_eq!(session.question, "when is the AI lab?");
        assert!(session.query.is_empty());
        assert!(session.result.is_empty());
        assert!(session.answer.is_empty());
    }
}
