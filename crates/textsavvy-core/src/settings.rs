//! Settings store port and typed loading.
//!
//! The durable state of the whole system is a handful of user preferences
//! owned by an external store. This subsystem reads the provider preference
//! and credential fresh at the start of every operation -- no caching -- so a
//! change takes effect on the very next trigger.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use textsavvy_types::config::{Settings, keys};
use textsavvy_types::enhance::ProviderId;
use textsavvy_types::error::SettingsError;

/// Trait for settings storage backends.
///
/// Stores arbitrary JSON values by string key. Uses RPITIT (native async fn
/// in traits, Rust 2024 edition). The file-backed implementation lives in
/// textsavvy-providers.
pub trait SettingsStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, SettingsError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), SettingsError>> + Send;
}

/// Load the typed settings view from a store, applying defaults for absent
/// keys.
pub async fn load_settings<S: SettingsStore>(store: &S) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    if let Some(value) = store.get(keys::PREFERRED_PROVIDER).await? {
        let raw = value
            .as_str()
            .ok_or_else(|| malformed(keys::PREFERRED_PROVIDER, "expected a string"))?;
        settings.preferred_provider = raw
            .parse::<ProviderId>()
            .map_err(|e| malformed(keys::PREFERRED_PROVIDER, &e))?;
    }

    if let Some(value) = store.get(keys::GEMINI_API_KEY).await? {
        let raw = value
            .as_str()
            .ok_or_else(|| malformed(keys::GEMINI_API_KEY, "expected a string"))?;
        if !raw.trim().is_empty() {
            settings.gemini_api_key = Some(raw.to_string());
        }
    }

    if let Some(value) = store.get(keys::SHOW_QUOTE).await? {
        settings.show_quote = value
            .as_bool()
            .ok_or_else(|| malformed(keys::SHOW_QUOTE, "expected a bool"))?;
    }

    Ok(settings)
}

fn malformed(key: &str, reason: &str) -> SettingsError {
    SettingsError::Malformed {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// In-memory settings store for tests and embedders without a filesystem.
#[derive(Default, Clone)]
pub struct MemorySettingsStore {
    values: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, serde_json::Value>> {
        self.values.lock().expect("settings lock poisoned")
    }
}

impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), SettingsError> {
        self.lock().insert(key.to_string(), value.clone());
        Ok(())
    }
}
