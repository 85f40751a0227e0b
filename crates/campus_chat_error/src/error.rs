//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError, GeminiError};

/// The foundation error enum for the campus-chat pipeline.
///
/// # Examples
///
/// ```
/// use campus_chat_error::{CampusChatError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::ApiRequest("boom".into()));
/// let err: CampusChatError = gemini_err.into();
/// assert!(format!("{}", err).contains("Gemini Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CampusChatErrorKind {
    /// Configuration error (missing secret, detected eagerly)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error (connection or execution)
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Model service error (API, auth, quota, malformed output)
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Anything without a more specific classification
    #[display("Error: {}", _0)]
    Other(#[error(not(source))] String),
}

/// Campus-chat error with kind discrimination.
///
/// # Examples
///
/// ```
/// use campus_chat_error::{CampusChatResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> CampusChatResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::MissingApiKey))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Campus Chat Error: {}", _0)]
pub struct CampusChatError(Box<CampusChatErrorKind>);

impl CampusChatError {
    /// Create a new error from a kind.
    pub fn new(kind: CampusChatErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Create an unclassified error from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(CampusChatErrorKind::Other(message.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CampusChatErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CampusChatErrorKind
impl<T> From<T> for CampusChatError
where
    T: Into<CampusChatErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for campus-chat operations.
pub type CampusChatResult<T> = std::result::Result<T, CampusChatError>;
