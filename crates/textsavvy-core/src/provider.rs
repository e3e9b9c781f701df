//! TextProvider trait definition.
//!
//! This is the abstraction every text-generation backend implements.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); dynamic
//! dispatch goes through [`crate::box_provider::BoxTextProvider`].

use textsavvy_types::enhance::{GenerationRequest, ProviderId};
use textsavvy_types::error::ProviderError;

/// Trait for text-generation provider backends (Gemini, Pollinations, ...).
///
/// One network round trip per [`TextProvider::generate`] call -- a provider
/// either answers or fails once; retries and ordering are the fallback
/// chain's concern. Implementations live in textsavvy-providers.
pub trait TextProvider: Send + Sync {
    /// Which provider this is.
    fn id(&self) -> ProviderId;

    /// Whether this backend needs an API credential at all.
    fn requires_credential(&self) -> bool;

    /// Whether a credential is currently configured. Only meaningful when
    /// [`TextProvider::requires_credential`] is true.
    fn has_credential(&self) -> bool {
        true
    }

    /// Send one generation request and return the raw response text.
    ///
    /// A syntactically successful response with no extractable text must be
    /// reported as [`ProviderError::EmptyResponse`], never as an empty `Ok`.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}

/// Builds a fresh fallback chain from the current settings.
///
/// The pipeline reads settings at the start of every operation and asks the
/// factory for a chain reflecting them, so a changed credential or provider
/// preference takes effect on the very next trigger. The concrete factory
/// lives in textsavvy-providers.
pub trait ProviderFactory: Send + Sync {
    fn build(&self, settings: &textsavvy_types::config::Settings) -> crate::fallback::FallbackChain;
}
