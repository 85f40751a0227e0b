//! Error classification for presentation.
//!
//! Maps every failure to one of five fixed message/admin-hint/code triples.
//! Typed errors classify by their enum tag; anything untyped falls back to an
//! ordered substring match over the error text. The rule order (connection
//! terms before API/quota terms before the default) is a presentation policy
//! carried over from the deployment and must be preserved exactly.

use campus_chat_error::{
    CampusChatError, CampusChatErrorKind, ConfigErrorKind, DatabaseErrorKind,
};

/// Stable opaque codes surfaced to users and admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Database password missing from the environment
    Db001,
    /// Database unreachable
    Db002,
    /// Model API key missing from the environment
    Api001,
    /// Model service failure (API, auth, quota)
    Api002,
    /// Anything else
    Gen001,
}

impl ErrorCode {
    /// The wire form of the code, e.g. `DB_001`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Db001 => "DB_001",
            ErrorCode::Db002 => "DB_002",
            ErrorCode::Api001 => "API_001",
            ErrorCode::Api002 => "API_002",
            ErrorCode::Gen001 => "GEN_001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure rendered for the user, with an actionable hint for the admin.
///
/// Technical details are attached only for the connection and API categories,
/// where they help diagnosis without code access.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ClassifiedError {
    /// Stable opaque code
    code: ErrorCode,
    /// Human-facing message
    #[getter(skip)]
    message: &'static str,
    /// What the user should tell the admin
    #[getter(skip)]
    admin_hint: &'static str,
    /// Technical details, present for DB_002 and API_002 only
    details: Option<String>,
}

impl ClassifiedError {
    /// Human-facing message
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// What the user should tell the admin
    pub fn admin_hint(&self) -> &'static str {
        self.admin_hint
    }

    fn new(code: ErrorCode, details: Option<String>) -> Self {
        let (message, admin_hint) = match code {
            ErrorCode::Db001 => (
                "The database password is not configured properly.",
                "The DB_PASSWORD is missing in the environment file",
            ),
            ErrorCode::Api001 => (
                "The AI service is not configured properly.",
                "The GEMINI_API_KEY is missing in the environment file",
            ),
            ErrorCode::Db002 => (
                "Unable to connect to the campus database.",
                "Database connection failed - check if PostgreSQL is running",
            ),
            ErrorCode::Api002 => (
                "The AI service is temporarily unavailable.",
                "Gemini API error - may need to check API key or quota",
            ),
            ErrorCode::Gen001 => (
                "An unexpected error occurred while processing your question.",
                "General application error - check logs",
            ),
        };

        // Only the categories whose hints mention infrastructure carry details.
        let details = match code {
            ErrorCode::Db002 | ErrorCode::Api002 => details,
            _ => None,
        };

        Self {
            code,
            message,
            admin_hint,
            details,
        }
    }
}

/// Classify a typed pipeline error for presentation.
///
/// # Examples
///
/// ```
/// use campus_chat_error::{CampusChatError, ConfigError, ConfigErrorKind};
/// use campus_chat_pipeline::{ErrorCode, classify};
///
/// let err: CampusChatError = ConfigError::new(ConfigErrorKind::MissingDbPassword).into();
/// assert_eq!(*classify(&err).code(), ErrorCode::Db001);
/// ```
pub fn classify(err: &CampusChatError) -> ClassifiedError {
    match err.kind() {
        CampusChatErrorKind::Config(config) => match config.kind {
            ConfigErrorKind::MissingDbPassword => ClassifiedError::new(ErrorCode::Db001, None),
            ConfigErrorKind::MissingApiKey => ClassifiedError::new(ErrorCode::Api001, None),
        },
        CampusChatErrorKind::Database(db) => match &db.kind {
            DatabaseErrorKind::Connection(details) => {
                ClassifiedError::new(ErrorCode::Db002, Some(details.clone()))
            }
            other => classify_details(&other.to_string()),
        },
        CampusChatErrorKind::Gemini(gemini) => {
            ClassifiedError::new(ErrorCode::Api002, Some(gemini.kind.to_string()))
        }
        CampusChatErrorKind::Other(details) => classify_details(details),
    }
}

/// Classify an untyped error message by ordered substring match.
///
/// First matching rule wins; an error mentioning both a connection term and a
/// quota term is a connection error.
pub fn classify_details(details: &str) -> ClassifiedError {
    const RULES: &[(&[&str], ErrorCode)] = &[
        (&["connection", "connect"], ErrorCode::Db002),
        (&["api", "quota"], ErrorCode::Api002),
    ];

    let lowered = details.to_lowercase();
    for (terms, code) in RULES {
        if terms.iter().any(|term| lowered.contains(term)) {
            return ClassifiedError::new(*code, Some(details.to_string()));
        }
    }

    ClassifiedError::new(ErrorCode::Gen001, Some(details.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_chat_error::{ConfigError, DatabaseError, GeminiError, GeminiErrorKind};

    #[test]
    fn test_missing_db_password_is_db_001() {
        let err: CampusChatError = ConfigError::new(ConfigErrorKind::MissingDbPassword).into();
        let classified = classify(&err);
        assert_eq!(*classified.code(), ErrorCode::Db001);
        assert!(classified.details().is_none());
    }

    #[test]
    fn test_missing_api_key_is_api_001() {
        let err: CampusChatError = ConfigError::new(ConfigErrorKind::MissingApiKey).into();
        assert_eq!(*classify(&err).code(), ErrorCode::Api001);
    }

    #[test]
    fn test_connection_failure_is_db_002_with_details() {
        let err: CampusChatError =
            DatabaseError::new(DatabaseErrorKind::Connection("refused".to_string())).into();
        let classified = classify(&err);
        assert_eq!(*classified.code(), ErrorCode::Db002);
        assert_eq!(classified.details().as_deref(), Some("refused"));
    }

    #[test]
    fn test_model_failure_is_api_002() {
        let err: CampusChatError =
            GeminiError::new(GeminiErrorKind::ApiRequest("quota exceeded".to_string())).into();
        let classified = classify(&err);
        assert_eq!(*classified.code(), ErrorCode::Api002);
        assert!(classified.details().is_some());
    }

    #[test]
    fn test_order_sensitive_connection_beats_quota() {
        // Both rule sets match; the connection rule is declared first.
        let classified = classify_details("connection quota exceeded");
        assert_eq!(*classified.code(), ErrorCode::Db002);
    }

    #[test]
    fn test_quota_without_connection_is_api_002() {
        assert_eq!(*classify_details("quota exceeded").code(), ErrorCode::Api002);
    }

    #[test]
    fn test_unmatched_text_is_gen_001() {
        let classified = classify_details("something odd happened");
        assert_eq!(*classified.code(), ErrorCode::Gen001);
        // Details stay inline-only for the connection and API categories.
        assert!(classified.details().is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(*classify_details("CONNECTION refused").code(), ErrorCode::Db002);
    }
}
