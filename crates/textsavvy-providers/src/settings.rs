//! File-backed settings store.
//!
//! Persists the key/value settings map as a single JSON document. Writes go
//! through a temp file in the same directory followed by a rename, so a
//! crash mid-write never leaves a torn settings file behind.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use textsavvy_core::settings::SettingsStore;
use textsavvy_types::error::SettingsError;

/// Settings store persisting to one JSON file on disk.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional per-user location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("textsavvy").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<HashMap<String, serde_json::Value>, SettingsError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(SettingsError::Storage(err.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| SettingsError::Malformed {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    async fn write_map(
        &self,
        map: &HashMap<String, serde_json::Value>,
    ) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Storage(e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), SettingsError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.clone());
        self.write_map(&map).await
    }
}
