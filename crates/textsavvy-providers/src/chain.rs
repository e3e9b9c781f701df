//! Provider chain factory -- wires concrete providers for the pipeline.
//!
//! This module lives in `textsavvy-providers` because it assembles concrete
//! HTTP clients. The pipeline asks the factory for a fresh chain on every
//! trigger with the settings it just loaded, so a credential saved a moment
//! ago is already live on the next request.

use secrecy::SecretString;

use textsavvy_core::box_provider::BoxTextProvider;
use textsavvy_core::fallback::FallbackChain;
use textsavvy_core::provider::ProviderFactory;
use textsavvy_types::config::Settings;

use crate::gemini::GeminiProvider;
use crate::pollinations::PollinationsProvider;

/// Factory producing the real HTTP provider chain.
///
/// Registers both known providers; which one is attempted first is decided
/// by the request's provider order, not by registration order.
#[derive(Default, Clone, Copy)]
pub struct HttpProviderFactory;

impl HttpProviderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderFactory for HttpProviderFactory {
    fn build(&self, settings: &Settings) -> FallbackChain {
        let api_key = settings.gemini_api_key.clone().map(SecretString::from);

        FallbackChain::new(vec![
            BoxTextProvider::new(GeminiProvider::new(api_key)),
            BoxTextProvider::new(PollinationsProvider::new()),
        ])
    }
}
