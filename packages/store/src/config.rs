//! # Client configuration: `notebook.toml`
//!
//! Defines the TOML configuration for the notes client (filename:
//! [`ClientConfig::filename`] = `"notebook.toml"`). Native builds read it from the
//! platform config directory; web builds start from the defaults and may override
//! the API base URL at compile time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"   # REST backend root
//!
//! [storage]
//! token_key = "auth_token"                 # durable key holding the bearer token
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers (`new`, `with_token_key`), TOML (de)serialisation, and the canonical filename constant. |
//! | [`ApiConfig`] | API section: the backend `base_url`. |
//! | [`StorageConfig`] | Storage section: the `token_key` used by the token store. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::token::DEFAULT_TOKEN_KEY;

/// Top-level configuration stored in `notebook.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// REST backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Durable storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            storage: StorageConfig::default(),
        }
    }

    /// Builder method to set the token storage key.
    pub fn with_token_key(mut self, key: &str) -> Self {
        self.storage.token_key = key.to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notebook.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.storage.token_key, "auth_token");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://notes.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://notes.example.com/api");
        assert_eq!(config.storage.token_key, "auth_token");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://x.test".to_string()).with_token_key("tok");
        let text = config.to_toml().unwrap();
        assert!(text.contains("token_key = \"tok\""));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml("[api\nbase_url = ").is_err());
    }
}
