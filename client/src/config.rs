//! Configuration for the client layer.

use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional prefix for keys written to the host key-value store,
    /// so several profiles can share one store.
    pub storage_prefix: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_prefix = match env::var("PARLEY_STORAGE_PREFIX") {
            Ok(value) if value.is_empty() => return Err(ConfigError::EmptyStoragePrefix),
            Ok(value) => Some(value),
            Err(_) => None,
        };

        Ok(Self { storage_prefix })
    }

    /// Full storage key for a logical key name.
    pub fn storage_key(&self, key: &str) -> String {
        match &self.storage_prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PARLEY_STORAGE_PREFIX must not be empty when set")]
    EmptyStoragePrefix,
}
