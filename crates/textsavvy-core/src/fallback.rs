//! Ordered multi-provider fallback.
//!
//! Drives one enhancement request through the caller-supplied provider order.
//! Each provider gets exactly one call; the first usable response wins and
//! every failure before it is recorded as a diagnostic. Fallback is
//! transparent: the user experience is "it worked", with fallback usage only
//! surfaced via a secondary best-effort notification by the caller.

use textsavvy_types::enhance::{
    AttemptFailure, EnhancementRequest, FallbackOutcome, GenerationRequest, ProviderId,
};
use textsavvy_types::error::EnhanceError;

use crate::box_provider::BoxTextProvider;
use crate::sanitize;

/// Registry of provider instances attempted in caller-supplied order.
pub struct FallbackChain {
    providers: Vec<BoxTextProvider>,
}

impl FallbackChain {
    pub fn new(providers: Vec<BoxTextProvider>) -> Self {
        Self { providers }
    }

    /// Look up a registered provider instance by id.
    pub fn provider(&self, id: ProviderId) -> Option<&BoxTextProvider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Run one request through the chain.
    ///
    /// Providers are attempted strictly in `request.provider_order`. A
    /// provider whose credential is missing counts as an immediate attempt
    /// failure, except when it is the sole provider in the order -- that case
    /// is statically knowable, so it is surfaced synchronously as
    /// [`EnhanceError::MissingCredential`] before any network attempt.
    ///
    /// A provider success that sanitizes to an empty string is treated as an
    /// attempt failure and fallback continues.
    pub async fn run(&self, request: &EnhancementRequest) -> Result<FallbackOutcome, EnhanceError> {
        let mut diagnostics: Vec<AttemptFailure> = Vec::new();

        for (attempt, &id) in request.provider_order.iter().enumerate() {
            let Some(provider) = self.provider(id) else {
                tracing::warn!(provider = %id, "Provider not registered, skipping");
                diagnostics.push(AttemptFailure {
                    provider: id,
                    reason: "provider not registered".to_string(),
                });
                continue;
            };

            if provider.requires_credential() && !provider.has_credential() {
                if request.provider_order.len() == 1 {
                    tracing::error!(provider = %id, "Sole provider has no credential configured");
                    return Err(EnhanceError::MissingCredential(id));
                }
                tracing::debug!(provider = %id, "Missing credential, trying next in order");
                diagnostics.push(AttemptFailure {
                    provider: id,
                    reason: "missing credential".to_string(),
                });
                continue;
            }

            let generation = GenerationRequest::new(request.prompt.clone(), request.temperature);

            match provider.generate(&generation).await {
                Ok(raw) => {
                    let final_text = sanitize::clean(&raw);
                    if final_text.is_empty() {
                        tracing::warn!(
                            provider = %id,
                            "Response sanitized to empty, trying next in order"
                        );
                        diagnostics.push(AttemptFailure {
                            provider: id,
                            reason: "empty after sanitization".to_string(),
                        });
                        continue;
                    }

                    let used_fallback = attempt > 0;
                    if used_fallback {
                        tracing::warn!(provider = %id, "Fallback provider handled the request");
                    } else {
                        tracing::debug!(provider = %id, "Primary provider handled the request");
                    }

                    return Ok(FallbackOutcome {
                        final_text,
                        used_provider: id,
                        used_fallback,
                        diagnostics,
                    });
                }
                Err(err) => {
                    tracing::warn!(provider = %id, error = %err, "Provider failed, trying next in order");
                    diagnostics.push(AttemptFailure {
                        provider: id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::error!(
            attempts = diagnostics.len(),
            "All providers failed for this request"
        );
        Err(EnhanceError::AllProvidersFailed { diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use textsavvy_types::error::ProviderError;

    use crate::provider::TextProvider;

    // --- Mock providers ---

    struct MockProvider {
        id: ProviderId,
        requires_credential: bool,
        has_credential: bool,
        result: MockResult,
        calls: Arc<AtomicUsize>,
    }

    #[derive(Clone)]
    enum MockResult {
        Success(String),
        Http(u16, String),
        Empty,
    }

    impl MockProvider {
        fn ok(id: ProviderId, text: &str) -> Self {
            Self {
                id,
                requires_credential: false,
                has_credential: true,
                result: MockResult::Success(text.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(id: ProviderId, status: u16, body: &str) -> Self {
            Self {
                id,
                requires_credential: false,
                has_credential: true,
                result: MockResult::Http(status, body.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn without_credential(id: ProviderId) -> Self {
            Self {
                id,
                requires_credential: true,
                has_credential: false,
                result: MockResult::Empty,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    impl TextProvider for MockProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        fn requires_credential(&self) -> bool {
            self.requires_credential
        }

        fn has_credential(&self) -> bool {
            self.has_credential
        }

        fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> impl Future<Output = Result<String, ProviderError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.result.clone();
            async move {
                match result {
                    MockResult::Success(text) => Ok(text),
                    MockResult::Http(status, body) => Err(ProviderError::Http { status, body }),
                    MockResult::Empty => Err(ProviderError::EmptyResponse),
                }
            }
        }
    }

    fn request(order: Vec<ProviderId>) -> EnhancementRequest {
        EnhancementRequest::new("Fix this. Text: hello", "hello", order).unwrap()
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_primary_succeeds_no_fallback() {
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(MockProvider::ok(ProviderId::Gemini, "Improved text")),
            BoxTextProvider::new(MockProvider::ok(ProviderId::Pollinations, "unused")),
        ]);

        let outcome = chain
            .run(&request(vec![ProviderId::Gemini, ProviderId::Pollinations]))
            .await
            .unwrap();

        assert_eq!(outcome.used_provider, ProviderId::Gemini);
        assert!(!outcome.used_fallback);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.final_text, "Improved text");
    }

    #[tokio::test]
    async fn test_fallback_ordering_first_fails_second_wins() {
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(MockProvider::failing(ProviderId::Gemini, 500, "boom")),
            BoxTextProvider::new(MockProvider::ok(ProviderId::Pollinations, "Backup text")),
        ]);

        let outcome = chain
            .run(&request(vec![ProviderId::Gemini, ProviderId::Pollinations]))
            .await
            .unwrap();

        assert_eq!(outcome.used_provider, ProviderId::Pollinations);
        assert!(outcome.used_fallback);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].provider, ProviderId::Gemini);
        assert!(outcome.diagnostics[0].reason.contains("500"));
    }

    #[tokio::test]
    async fn test_caller_supplied_order_is_respected() {
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(MockProvider::ok(ProviderId::Gemini, "from gemini")),
            BoxTextProvider::new(MockProvider::ok(ProviderId::Pollinations, "from pollinations")),
        ]);

        let outcome = chain
            .run(&request(vec![ProviderId::Pollinations, ProviderId::Gemini]))
            .await
            .unwrap();

        assert_eq!(outcome.used_provider, ProviderId::Pollinations);
        assert!(!outcome.used_fallback);
    }

    #[tokio::test]
    async fn test_total_failure_collects_diagnostics_in_attempt_order() {
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(MockProvider::failing(ProviderId::Gemini, 500, "a")),
            BoxTextProvider::new(MockProvider::failing(ProviderId::Pollinations, 502, "b")),
        ]);

        let err = chain
            .run(&request(vec![ProviderId::Gemini, ProviderId::Pollinations]))
            .await
            .unwrap_err();

        match err {
            EnhanceError::AllProvidersFailed { diagnostics } => {
                assert_eq!(diagnostics.len(), 2);
                assert_eq!(diagnostics[0].provider, ProviderId::Gemini);
                assert_eq!(diagnostics[1].provider, ProviderId::Pollinations);
            }
            other => panic!("expected AllProvidersFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sole_provider_missing_credential_fails_before_network() {
        let provider = MockProvider::without_credential(ProviderId::Gemini);
        let calls = provider.call_counter();
        let chain = FallbackChain::new(vec![BoxTextProvider::new(provider)]);

        let err = chain.run(&request(vec![ProviderId::Gemini])).await.unwrap_err();

        assert!(matches!(err, EnhanceError::MissingCredential(ProviderId::Gemini)));
        assert_eq!(calls.load(Ordering::SeqCst), 0, "no network attempt expected");
    }

    #[tokio::test]
    async fn test_missing_credential_with_fallback_continues() {
        let gemini = MockProvider::without_credential(ProviderId::Gemini);
        let gemini_calls = gemini.call_counter();
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(gemini),
            BoxTextProvider::new(MockProvider::ok(ProviderId::Pollinations, "Backup text")),
        ]);

        let outcome = chain
            .run(&request(vec![ProviderId::Gemini, ProviderId::Pollinations]))
            .await
            .unwrap();

        assert_eq!(outcome.used_provider, ProviderId::Pollinations);
        assert!(outcome.used_fallback);
        assert_eq!(outcome.diagnostics[0].reason, "missing credential");
        assert_eq!(gemini_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_response_sanitized_to_empty_triggers_fallback() {
        // Quotes only -- sanitizes to empty, so the chain must move on.
        let chain = FallbackChain::new(vec![
            BoxTextProvider::new(MockProvider::ok(ProviderId::Gemini, "\"''\"")),
            BoxTextProvider::new(MockProvider::ok(ProviderId::Pollinations, "Real text")),
        ]);

        let outcome = chain
            .run(&request(vec![ProviderId::Gemini, ProviderId::Pollinations]))
            .await
            .unwrap();

        assert_eq!(outcome.used_provider, ProviderId::Pollinations);
        assert_eq!(outcome.diagnostics[0].reason, "empty after sanitization");
    }

    #[tokio::test]
    async fn test_winning_response_is_sanitized() {
        let chain = FallbackChain::new(vec![BoxTextProvider::new(MockProvider::ok(
            ProviderId::Gemini,
            "  \"Fixed text.\"\\n",
        ))]);

        let outcome = chain.run(&request(vec![ProviderId::Gemini])).await.unwrap();
        assert_eq!(outcome.final_text, "Fixed text.");
    }
}
