//! Google Gemini API client.
//!
//! A thin wrapper over the `gemini-rust` SDK. Each client is bound to one
//! model and one sampling temperature at construction time; the pipeline keeps
//! two instances (temperature 0.0 for query synthesis, 0.3 for answer
//! synthesis) and reuses them for the process lifetime.

use async_trait::async_trait;
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use campus_chat_core::{GenerateRequest, GenerateResponse, Role};
use campus_chat_error::{CampusChatResult, GeminiError, GeminiErrorKind};
use campus_chat_interface::ChatDriver;

use super::GeminiResult;

/// Client for the Google Gemini API.
pub struct GeminiClient {
    client: Gemini,
    model_name: String,
    temperature: f32,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client for a model with a fixed temperature.
    ///
    /// The API key is supplied by the caller; it is loaded from the
    /// environment exactly once at process start, before any network call.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use campus_chat_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let query_model = GeminiClient::new("api-key", "gemini-2.0-flash", 0.0)?;
    /// let reply_model = GeminiClient::new("api-key", "gemini-2.0-flash", 0.3)?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new", skip(api_key))]
    pub fn new(api_key: &str, model: &str, temperature: f32) -> CampusChatResult<Self> {
        Self::new_internal(api_key, model, temperature).map_err(Into::into)
    }

    fn new_internal(api_key: &str, model: &str, temperature: f32) -> GeminiResult<Self> {
        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            model_name: model.to_string(),
            temperature,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, adding the "models/"
    /// prefix required by the Gemini API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let mut builder = self.client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                // Gemini uses a separate system prompt
                Role::System => system_prompt = Some(msg.content.clone()),
                Role::User => builder = builder.with_user_message(&msg.content),
                Role::Assistant => builder = builder.with_model_message(&msg.content),
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        builder = builder.with_temperature(req.temperature.unwrap_or(self.temperature));

        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        Ok(GenerateResponse {
            text: response.text(),
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError with
    /// HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl ChatDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> CampusChatResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
