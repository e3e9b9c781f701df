//! Motivational quote fetching for the popup surface.
//!
//! Cosmetic feature sharing the enhancement pipeline's ordered-fallback
//! shape, with one extra rung: a built-in literal quote used when every
//! network attempt fails. Never surfaces an error to the caller.

use textsavvy_types::enhance::EnhancementRequest;
use textsavvy_types::error::EnhanceError;

use crate::provider::ProviderFactory;
use crate::settings::{SettingsStore, load_settings};

/// Prompt sent to the providers.
pub const QUOTE_PROMPT: &str = "Generate a short motivational quote for a software developer \
    (max 12 words). Just send the quote without any additional words.";

/// Literal fallback when every provider attempt fails.
pub const FALLBACK_QUOTE: &str = "Make it work, make it right, make it fast.";

/// Quotes want more creative sampling than corrections.
const QUOTE_TEMPERATURE: f64 = 1.5;

/// Fetches one quote per call through the provider chain.
pub struct QuotePicker<F, S> {
    factory: F,
    store: S,
}

impl<F, S> QuotePicker<F, S>
where
    F: ProviderFactory,
    S: SettingsStore,
{
    pub fn new(factory: F, store: S) -> Self {
        Self { factory, store }
    }

    /// Fetch a quote, falling back to the built-in literal on any failure.
    pub async fn pick(&self) -> String {
        let settings = match load_settings(&self.store).await {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "Settings unavailable, using defaults for quote");
                Default::default()
            }
        };

        let Some(mut request) =
            EnhancementRequest::new(QUOTE_PROMPT, QUOTE_PROMPT, settings.provider_order())
        else {
            return FALLBACK_QUOTE.to_string();
        };
        request.temperature = QUOTE_TEMPERATURE;

        let chain = self.factory.build(&settings);
        match chain.run(&request).await {
            Ok(outcome) => outcome.final_text,
            Err(EnhanceError::MissingCredential(provider)) => {
                tracing::debug!(%provider, "No credential for quote fetch, using literal");
                FALLBACK_QUOTE.to_string()
            }
            Err(err) => {
                tracing::debug!(error = %err, "Quote fetch failed, using literal");
                FALLBACK_QUOTE.to_string()
            }
        }
    }
}
