//! GeminiProvider -- concrete `TextProvider` implementation for the Gemini
//! generateContent API.
//!
//! Sends `POST {base}/v1beta/models/{model}:generateContent?key={credential}`
//! with a structured JSON chat-completion body and extracts
//! `candidates[0].content.parts[0].text` from the response.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the request query. The provider struct does not derive
//! Debug.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use textsavvy_core::provider::TextProvider;
use textsavvy_types::enhance::{GenerationRequest, ProviderId};
use textsavvy_types::error::ProviderError;

mod types;

use types::{GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini text-generation provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider. `api_key` is `None` when the user has
    /// not configured a credential; the provider then reports itself as not
    /// ready instead of attempting the network.
    pub fn new(api_key: Option<SecretString>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

impl TextProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn requires_credential(&self) -> bool {
        true
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredential)?;
        let body = self.to_gemini_request(request);

        tracing::debug!(model = %self.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.expose_secret())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(format!("failed to parse response: {e}")))?;

        match gemini_response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(ProviderError::EmptyResponse),
        }
    }
}
