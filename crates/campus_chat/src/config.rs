//! Environment-sourced configuration.

use campus_chat_error::{ConfigError, ConfigErrorKind};

/// Runtime configuration for the chatbot.
///
/// Two secrets are required; both are checked before any connection or API
/// call is attempted. The database secret is checked first, then the model
/// API key, and that order is part of the presentation contract (it decides
/// which error code the user sees when both are missing).
#[derive(Clone)]
pub struct Config {
    /// Database password (required)
    pub db_password: String,
    /// Gemini API key (required)
    pub gemini_api_key: String,
    /// Database server hostname
    pub db_host: String,
    /// Model identifier used for both pipeline calls
    pub model: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing secret:
    /// `DB_PASSWORD` is checked before `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`Config::from_env`] so tests can drive the check order
    /// without mutating process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_password = lookup("DB_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingDbPassword))?;

        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingApiKey))?;

        Ok(Self {
            db_password,
            gemini_api_key,
            db_host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            model: lookup("CAMPUS_CHAT_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string()),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_password", &"<redacted>")
            .field("gemini_api_key", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_db_password_reported_first() {
        // Both secrets missing: the database check comes first.
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingDbPassword);

        // Even with the API key present, the database check still runs first.
        let err =
            Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "key")])).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingDbPassword);
    }

    #[test]
    fn test_missing_api_key_reported_second() {
        let err = Config::from_lookup(lookup_from(&[("DB_PASSWORD", "pw")])).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingApiKey);
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("DB_PASSWORD", ""),
            ("GEMINI_API_KEY", "key"),
        ]))
        .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingDbPassword);
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_PASSWORD", "pw"),
            ("GEMINI_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_PASSWORD", "hunter2"),
            ("GEMINI_API_KEY", "AIzaSyTest"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("AIzaSyTest"));
    }
}
