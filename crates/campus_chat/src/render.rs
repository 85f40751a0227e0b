//! Plain-text rendering for the terminal surface.
//!
//! The presentation layer is a thin adapter over the pipeline outcome: it
//! formats either the answer or the classified error panel, nothing else.

use campus_chat_core::Session;
use campus_chat_pipeline::ClassifiedError;

/// Render a completed session's answer.
pub fn render_answer(session: &Session) -> String {
    format!("Answer:\n{}", session.answer)
}

/// Render a classified error panel.
///
/// The panel shows the human message, the admin-actionable instruction and
/// the stable code; technical details appear only when the classifier
/// attached them.
pub fn render_error(error: &ClassifiedError) -> String {
    let mut out = String::new();
    out.push_str("Something went wrong\n");
    out.push_str(error.message());
    out.push('\n');
    out.push_str(&format!("Please tell the admin: \"{}\"\n", error.admin_hint()));
    out.push_str(&format!("Error Code: {}", error.code()));

    if let Some(details) = error.details() {
        out.push_str(&format!("\nTechnical details: {}", details));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_chat_error::{CampusChatError, ConfigError, ConfigErrorKind};
    use campus_chat_pipeline::{classify, classify_details};

    #[test]
    fn test_render_answer() {
        let mut session = Session::new("who teaches AI?");
        session.answer = "Ms. Himani Tyagi teaches AI.".to_string();
        let rendered = render_answer(&session);
        assert!(rendered.contains("Ms. Himani Tyagi"));
    }

    #[test]
    fn test_render_config_error_has_code_but_no_details() {
        let err: CampusChatError = ConfigError::new(ConfigErrorKind::MissingDbPassword).into();
        let rendered = render_error(&classify(&err));
        assert!(rendered.contains("Error Code: DB_001"));
        assert!(rendered.contains("DB_PASSWORD"));
        assert!(!rendered.contains("Technical details"));
    }

    #[test]
    fn test_render_connection_error_includes_details() {
        let rendered = render_error(&classify_details("connection refused"));
        assert!(rendered.contains("Error Code: DB_002"));
        assert!(rendered.contains("Technical details: connection refused"));
    }
}
