//! The three-step question pipeline.

use crate::classify::{ClassifiedError, classify};
use crate::extraction::parse_query_output;
use crate::prompts;
use campus_chat_core::{GenerateRequest, GenerateResponse, Session};
use campus_chat_error::{CampusChatResult, GeminiError, GeminiErrorKind};
use campus_chat_interface::{ChatDriver, ScheduleGateway};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Sampling temperature for query synthesis (deterministic).
pub const QUERY_TEMPERATURE: f32 = 0.0;
/// Sampling temperature for answer synthesis (more natural phrasing).
pub const REPLY_TEMPERATURE: f32 = 0.3;
/// Default deadline for each model call.
const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(60);

/// The outcome of one question, ready for presentation.
///
/// The presentation layer renders either the answer or the classified error;
/// it never sees a raw failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The pipeline completed; the session carries the answer.
    Answer(Session),
    /// A step failed; the classifier produced the user-facing rendering.
    Failed(ClassifiedError),
}

/// Executes the question pipeline against one model pair and one gateway.
///
/// All three handles are constructed once at process start and reused for
/// every question. The schema descriptor is fetched from the gateway at
/// construction time and cached for the process lifetime.
pub struct Pipeline<D: ChatDriver, G: ScheduleGateway> {
    query_model: D,
    reply_model: D,
    gateway: G,
    schema: String,
    model_timeout: Duration,
}

impl<D: ChatDriver, G: ScheduleGateway> Pipeline<D, G> {
    /// Create a pipeline, fetching the schema descriptor from the gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be described (typically an
    /// unreachable database).
    #[instrument(name = "pipeline_new", skip_all)]
    pub fn new(query_model: D, reply_model: D, gateway: G) -> CampusChatResult<Self> {
        let schema = gateway.describe_schema()?;
        debug!(schema_length = schema.len(), "Cached schema descriptor");

        Ok(Self {
            query_model,
            reply_model,
            gateway,
            schema,
            model_timeout: DEFAULT_MODEL_TIMEOUT,
        })
    }

    /// Override the per-call model deadline.
    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    /// The cached schema descriptor.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Step 1: synthesize a SQL query from the question.
    #[instrument(name = "pipeline.write_query", skip_all)]
    pub async fn write_query(&self, session: &mut Session) -> CampusChatResult<()> {
        let req = GenerateRequest::from_parts(
            prompts::query_system_message(&self.schema),
            format!("Question: {}", session.question),
        )
        .with_temperature(QUERY_TEMPERATURE);

        let response = self.generate(&self.query_model, &req).await?;
        let output = parse_query_output(&response.text)?;

        info!(query = %output.query, "Synthesized query");
        session.query = output.query;
        Ok(())
    }

    /// Step 2: execute the query, converting failure into a pseudo-result.
    ///
    /// Never fails: an execution error is stored as
    /// `"Error executing query: <details>"` so the answer step can narrate it.
    #[instrument(name = "pipeline.execute_query", skip_all)]
    pub fn execute_query(&self, session: &mut Session) {
        session.result = match self.gateway.execute(&session.query) {
            Ok(result) => result,
            Err(e) => {
                info!(error = %e, "Query execution failed, narrating as result");
                format!("Error executing query: {}", e)
            }
        };
    }

    /// Step 3: phrase the final answer from question, query and result.
    #[instrument(name = "pipeline.generate_answer", skip_all)]
    pub async fn generate_answer(&self, session: &mut Session) -> CampusChatResult<()> {
        let req = GenerateRequest::from_parts(
            prompts::REPLY_SYSTEM_MESSAGE,
            prompts::reply_user_message(&session.question, &session.query, &session.result),
        )
        .with_temperature(REPLY_TEMPERATURE);

        let response = self.generate(&self.reply_model, &req).await?;
        session.answer = response.text;
        Ok(())
    }

    /// Run the full pipeline for one question.
    ///
    /// Never returns an error and never panics: any step failure comes back
    /// as [`ChatOutcome::Failed`] with its classification.
    #[instrument(name = "pipeline.ask", skip(self), fields(question_length = question.len()))]
    pub async fn ask(&self, question: &str) -> ChatOutcome {
        let mut session = Session::new(question);

        if let Err(e) = self.write_query(&mut session).await {
            return ChatOutcome::Failed(classify(&e));
        }

        self.execute_query(&mut session);

        if let Err(e) = self.generate_answer(&mut session).await {
            return ChatOutcome::Failed(classify(&e));
        }

        ChatOutcome::Answer(session)
    }

    /// Issue one model call under the configured deadline.
    async fn generate(
        &self,
        model: &D,
        req: &GenerateRequest,
    ) -> CampusChatResult<GenerateResponse> {
        match tokio::time::timeout(self.model_timeout, model.generate(req)).await {
            Ok(result) => result,
            Err(_) => Err(GeminiError::new(GeminiErrorKind::Timeout(
                self.model_timeout.as_secs(),
            ))
            .into()),
        }
    }
}
