//! Configuration for the Enso swap tools

pub mod rpc;

use crate::{Error, Result};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

// Re-export RPC config
pub use rpc::RpcConfig;

/// Enso API key environment variable name
pub const ENSO_API_KEY_ENV: &str = "ENSO_API_KEY";

/// Production Enso API
pub const DEFAULT_ENSO_API_URL: &str = "https://api.enso.finance";

fn default_api_url() -> String {
    DEFAULT_ENSO_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn deserialize_secret<'de, D>(deserializer: D) -> std::result::Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.filter(|k| !k.is_empty()).map(SecretString::from))
}

/// Enso router API settings
#[derive(Debug, Serialize, Deserialize)]
pub struct EnsoConfig {
    /// API key. There is no shared default; it must come from the
    /// config file or `ENSO_API_KEY`.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "deserialize_secret"
    )]
    pub api_key: Option<SecretString>,
    /// Base URL of the Enso API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EnsoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured API key, or a configuration error naming the env var
    pub fn require_api_key(&self) -> Result<&SecretString> {
        self.api_key.as_ref().ok_or_else(|| {
            Error::Config(format!(
                "Enso API key missing. Set {} or enso.api_key in the config file.",
                ENSO_API_KEY_ENV
            ))
        })
    }
}

impl Default for EnsoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Main configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enso router settings
    #[serde(default)]
    pub enso: EnsoConfig,
    /// RPC URL overrides by chain ID, applied on top of `RpcConfig::from_env`
    #[serde(default)]
    pub rpc_urls: HashMap<u64, String>,
}

impl Config {
    /// Load the config file if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// `ENSO_API_KEY` takes priority over the file
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(ENSO_API_KEY_ENV) {
            if !key.is_empty() {
                tracing::debug!("Using Enso API key from {}", ENSO_API_KEY_ENV);
                self.enso.api_key = Some(SecretString::from(key));
            }
        }
        self
    }

    /// RPC endpoints from the environment with file overrides applied
    pub fn rpc(&self) -> RpcConfig {
        RpcConfig::from_env().with_overrides(&self.rpc_urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[test]
    fn defaults_have_no_api_key() {
        let config = Config::default();
        assert!(config.enso.api_key.is_none());
        assert_eq!(config.enso.api_url, DEFAULT_ENSO_API_URL);
        assert_eq!(config.enso.timeout(), Duration::from_secs(30));

        let err = config.enso.require_api_key().unwrap_err();
        assert!(err.to_string().contains(ENSO_API_KEY_ENV));
    }

    #[test]
    fn deserialize_partial_config() {
        let value = serde_json::json!({
            "enso": { "api_key": "test-key", "timeout_secs": 5 },
            "rpc_urls": { "8453": "https://base.example" }
        });
        let parsed: Config = serde_json::from_value(value).expect("parse config");

        let key = parsed.enso.require_api_key().expect("key present");
        assert_eq!(key.expose_secret(), "test-key");
        assert_eq!(parsed.enso.timeout_secs, 5);
        assert_eq!(parsed.enso.api_url, DEFAULT_ENSO_API_URL);
        assert_eq!(
            parsed.rpc_urls.get(&8453).map(String::as_str),
            Some("https://base.example")
        );
    }

    #[test]
    fn empty_api_key_is_treated_as_missing() {
        let value = serde_json::json!({ "enso": { "api_key": "" } });
        let parsed: Config = serde_json::from_value(value).expect("parse config");
        assert!(parsed.enso.api_key.is_none());
    }

    #[test]
    fn serialized_config_omits_api_key() {
        let mut config = Config::default();
        config.enso.api_key = Some(SecretString::from("super-secret".to_string()));

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "enso": {{ "api_url": "http://localhost:9000" }} }}"#
        )
        .expect("write config");

        let config = Config::from_file(file.path()).expect("load config");
        assert_eq!(config.enso.api_url, "http://localhost:9000");
    }

    #[test]
    fn load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
