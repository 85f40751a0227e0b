//! Configuration error types.

/// Configuration error conditions.
///
/// These are checked eagerly at startup, before any connection or API call is
/// attempted. The check order (database secret first, then the model API key)
/// is part of the presentation contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Database password not found in environment
    #[display("DB_PASSWORD environment variable not set")]
    MissingDbPassword,
    /// Model API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use campus_chat_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingDbPassword);
/// assert!(format!("{}", err).contains("DB_PASSWORD"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
