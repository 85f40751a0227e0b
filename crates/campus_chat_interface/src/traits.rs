//! Trait seams for the model service and the database gateway.

use async_trait::async_trait;
use campus_chat_core::{GenerateRequest, GenerateResponse};
use campus_chat_error::CampusChatResult;

/// Core trait that all model backends must implement.
///
/// A backend is a single model handle with a fixed sampling configuration;
/// the pipeline holds two of them (deterministic query synthesis, moderate
/// temperature answer synthesis).
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Generate model output for a prompt.
    async fn generate(&self, req: &GenerateRequest) -> CampusChatResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// Gateway to the campus schedule database.
///
/// Implementations hold one connection for the process lifetime and reuse it
/// across requests; both operations are single-statement reads.
pub trait ScheduleGateway: Send + Sync {
    /// Describe the table structure visible to query synthesis.
    ///
    /// The descriptor is a plain-text rendering of column names and types,
    /// suitable for embedding in a prompt. Obtained once and cached by the
    /// caller for the process lifetime.
    fn describe_schema(&self) -> CampusChatResult<String>;

    /// Execute one read query and render the rows as text.
    ///
    /// Execution failures are reported as typed errors; the pipeline converts
    /// them into a textual pseudo-result so the answer step can narrate them.
    fn execute(&self, sql: &str) -> CampusChatResult<String>;
}
