//! PollinationsProvider -- concrete `TextProvider` implementation for the
//! Pollinations text endpoint.
//!
//! Plain-text-over-URL contract: `GET {base}/{url-encoded prompt}` and the
//! response body is the generated text. No credential is required.

use std::time::Duration;

use reqwest::Url;

use textsavvy_core::provider::TextProvider;
use textsavvy_types::enhance::{GenerationRequest, ProviderId};
use textsavvy_types::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://text.pollinations.ai";

/// Pollinations text-generation provider.
pub struct PollinationsProvider {
    client: reqwest::Client,
    base_url: String,
}

impl PollinationsProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the request URL with the prompt as a percent-encoded path
    /// segment.
    fn request_url(&self, prompt: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::Transport(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::Transport("base URL cannot carry a path".to_string()))?
            .push(prompt);
        Ok(url)
    }
}

impl Default for PollinationsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProvider for PollinationsProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Pollinations
    }

    fn requires_credential(&self) -> bool {
        false
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let url = self.request_url(&request.prompt)?;

        tracing::debug!("Sending Pollinations text request");

        let response = self
            .client
            .get(url)
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

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("failed to read body: {e}")))?;

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}
