//! Request and outcome types for the text-enhancement pipeline.
//!
//! These types model one user-triggered enhancement: the prompt sent to a
//! provider, the ordered list of providers to try, and the outcome of the
//! fallback run. Nothing here is persisted beyond a single operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a text-generation provider backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    Gemini,
    Pollinations,
}

impl ProviderId {
    /// All known providers, in default preference order.
    pub const ALL: [ProviderId; 2] = [ProviderId::Gemini, ProviderId::Pollinations];

    /// Preference-ordered sequence: `preferred` first, then the rest in
    /// default order.
    pub fn order_from(preferred: ProviderId) -> Vec<ProviderId> {
        let mut order = vec![preferred];
        order.extend(Self::ALL.iter().copied().filter(|id| *id != preferred));
        order
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Gemini => write!(f, "gemini"),
            ProviderId::Pollinations => write!(f, "pollinations"),
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderId::Gemini),
            "pollinations" => Ok(ProviderId::Pollinations),
            other => Err(format!("invalid provider id: '{other}'")),
        }
    }
}

/// A single generation call to one provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            max_output_tokens: None,
        }
    }
}

/// One enhancement run: the assembled prompt, the source text it was built
/// from, and the providers to try in order.
///
/// Invariants (enforced by [`EnhancementRequest::new`]): `provider_order` is
/// non-empty and `source_text` is non-blank. A whitespace-only selection
/// short-circuits before a request is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementRequest {
    pub prompt: String,
    pub source_text: String,
    pub provider_order: Vec<ProviderId>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_temperature() -> f64 {
    0.7
}

impl EnhancementRequest {
    /// Build a request, returning `None` when the invariants do not hold.
    pub fn new(
        prompt: impl Into<String>,
        source_text: impl Into<String>,
        provider_order: Vec<ProviderId>,
    ) -> Option<Self> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() || provider_order.is_empty() {
            return None;
        }
        Some(Self {
            prompt: prompt.into(),
            source_text,
            provider_order,
            temperature: default_temperature(),
        })
    }
}

/// A recorded failure from one provider attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptFailure {
    pub provider: ProviderId,
    pub reason: String,
}

/// Outcome of a successful run through the fallback chain.
///
/// Consumed once by the caller to decide whether to emit a user-facing
/// notification; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackOutcome {
    /// Sanitized final text from the winning provider.
    pub final_text: String,
    /// Provider that produced the final text.
    pub used_provider: ProviderId,
    /// True when the winning provider was not the first attempted.
    pub used_fallback: bool,
    /// Failures recorded before the winning attempt, in attempt order.
    pub diagnostics: Vec<AttemptFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_roundtrip() {
        for id in ProviderId::ALL {
            let s = id.to_string();
            let parsed: ProviderId = s.parse().unwrap();
            assert_eq!(id, parsed);
        }
    }

    #[test]
    fn test_provider_id_serde() {
        let json = serde_json::to_string(&ProviderId::Pollinations).unwrap();
        assert_eq!(json, "\"pollinations\"");
        let parsed: ProviderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ProviderId::Pollinations);
    }

    #[test]
    fn test_order_from_puts_preferred_first() {
        assert_eq!(
            ProviderId::order_from(ProviderId::Pollinations),
            vec![ProviderId::Pollinations, ProviderId::Gemini]
        );
        assert_eq!(
            ProviderId::order_from(ProviderId::Gemini),
            vec![ProviderId::Gemini, ProviderId::Pollinations]
        );
    }

    #[test]
    fn test_request_rejects_blank_source() {
        assert!(EnhancementRequest::new("p", "   \n\t", vec![ProviderId::Gemini]).is_none());
        assert!(EnhancementRequest::new("p", "", vec![ProviderId::Gemini]).is_none());
    }

    #[test]
    fn test_request_rejects_empty_order() {
        assert!(EnhancementRequest::new("p", "text", vec![]).is_none());
    }

    #[test]
    fn test_request_default_temperature() {
        let req = EnhancementRequest::new("p", "text", vec![ProviderId::Gemini]).unwrap();
        assert!((req.temperature - 0.7).abs() < f64::EPSILON);
    }
}
