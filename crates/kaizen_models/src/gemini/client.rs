//! Gemini `generateContent` REST client.

use crate::gemini::{GeminiResult, conversion, dto};
use async_trait::async_trait;
use kaizen_core::{GenerateRequest, GenerateResponse};
use kaizen_error::{GeminiError, GeminiErrorKind, KaizenResult};
use kaizen_interface::{KaizenDriver, ModelMetadata, Video, Vision};
use reqwest::Client;
use tracing::{debug, instrument};

/// Default model when a request carries no model of its own.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default sampling temperature for analysis runs.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client reading `GEMINI_API_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    #[instrument(skip_all)]
    pub fn new(model: impl Into<String>) -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Static capability metadata for the configured model.
    pub fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "gemini".to_string(),
            model: self.model.clone(),
            max_input_tokens: 1_048_576,
            max_output_tokens: 8_192,
            supports_vision: true,
            supports_video: true,
        }
    }

    async fn generate_content(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model);
        let wire = conversion::to_wire_request(req);

        let url = format!("{BASE_URL}/{model}:generateContent");
        debug!(model = %model, parts = wire.contents[0].parts.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&wire)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let wire_response: dto::GenerateContentResponse = response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ResponseParse(format!(
                "failed to parse response body: {e}"
            )))
        })?;

        conversion::from_wire_response(wire_response)
    }
}

#[async_trait]
impl KaizenDriver for GeminiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> KaizenResult<GenerateResponse> {
        Ok(self.generate_content(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

impl Vision for GeminiClient {
    fn max_images_per_request(&self) -> usize {
        3000
    }
}

impl Video for GeminiClient {
    fn max_video_duration_seconds(&self) -> usize {
        600
    }

    fn max_video_size_bytes(&self) -> usize {
        20 * 1024 * 1024
    }
}
