//! Gemini API client
//!
//! Direct HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use std::time::Duration;

use super::types::{ApiErrorEnvelope, GeminiApiRequest, GeminiApiResponse};
use super::{GenerationError, TextGenerator};
use crate::config::GeminiConfig;

/// Header carrying the API key; keeps it out of URLs and error text
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Wrap a transport error, dropping the request URL from its message
fn request_error(e: reqwest::Error) -> GenerationError {
    GenerationError::Request(e.without_url())
}

/// Client for a single configured Gemini model
///
/// Holds one `reqwest::Client`, so connections are pooled across requests.
/// Not `Debug`: it carries the API key.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// * `GenerationError::MissingApiKey` if the key is empty
    /// * `GenerationError::Request` if the HTTP client cannot be built
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        if config.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model name requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        let url = self.endpoint();

        tracing::debug!(
            url = %url,
            model = %self.model,
            prompt_len = prompt.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&GeminiApiRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            let status_code = status.as_u16();
            let (message, reason) = match serde_json::from_str::<ApiErrorEnvelope>(&body) {
                Ok(envelope) => (envelope.error.message, envelope.error.status),
                Err(_) if body.trim().is_empty() => (
                    format!("Gemini API returned error status {}", status_code),
                    None,
                ),
                Err(_) => (body, None),
            };

            tracing::error!(
                status_code = status_code,
                reason = ?reason,
                error = %message,
                "Gemini API returned error status"
            );

            return Err(GenerationError::Api {
                status: status_code,
                message,
            });
        }

        let parsed: GeminiApiResponse = serde_json::from_str(&body).map_err(|e| {
            GenerationError::Decode(format!(
                "Failed to parse JSON response from Gemini API: {} - Response body: {}",
                e, body
            ))
        })?;

        let text = parsed.text();
        match &text {
            Some(t) => tracing::debug!(
                response_len = t.len(),
                "Successfully received response from Gemini API"
            ),
            None => tracing::warn!(
                candidates = parsed.candidates.len(),
                "Gemini API response contained no usable text"
            ),
        }

        Ok(text)
    }
}
