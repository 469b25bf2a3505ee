//! Configuration loading for the tradewinds client.
//!
//! All fields are required. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the remote API, with or without a trailing slash.
    pub api_base_url: String,
    /// Bearer token sent verbatim on every request.
    pub agent_token: String,
    /// Agent callsign; also names the per-agent cache file.
    pub callsign: String,
    /// Root directory holding one subdirectory per resource family.
    pub cache_dir: PathBuf,
    pub request_timeout_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ClientConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.agent_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "agent_token",
                reason: "must not be empty".to_string(),
            });
        }
        if self.callsign.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "callsign",
                reason: "must not be empty".to_string(),
            });
        }
        if self.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cache_dir",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
