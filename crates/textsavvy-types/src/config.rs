//! User settings read by the pipeline.
//!
//! The settings store itself is a collaborator (see `SettingsStore` in
//! textsavvy-core); this module defines the typed view over it and the
//! well-known keys. The pipeline only ever reads the provider preference and
//! credential; it never writes them.

use serde::{Deserialize, Serialize};

use crate::enhance::ProviderId;

/// Well-known settings keys.
pub mod keys {
    pub const PREFERRED_PROVIDER: &str = "preferred_provider";
    pub const GEMINI_API_KEY: &str = "gemini_api_key";
    pub const SHOW_QUOTE: &str = "show_quote";
}

/// Typed view of the user's saved configuration.
///
/// Fetched fresh at the start of each operation (no caching), so a
/// preference change takes effect on the very next trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_preferred_provider")]
    pub preferred_provider: ProviderId,
    /// Gemini API credential. `None` means not configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(default = "default_show_quote")]
    pub show_quote: bool,
}

fn default_preferred_provider() -> ProviderId {
    ProviderId::Gemini
}

fn default_show_quote() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred_provider(),
            gemini_api_key: None,
            show_quote: default_show_quote(),
        }
    }
}

impl Settings {
    /// Provider attempt order implied by the saved preference.
    pub fn provider_order(&self) -> Vec<ProviderId> {
        ProviderId::order_from(self.preferred_provider)
    }
}
