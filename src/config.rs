//! Configuration management for quotekeep.
//!
//! Handles:
//! - Storage location override
//! - Remote endpoint settings
//! - Sync loop interval

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};
use crate::util::atomic_write;

/// Default remote endpoint (the mock quote source).
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default sync interval in seconds.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Remote endpoint settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Sync loop settings.
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuoteError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| QuoteError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Save configuration to a specific path, atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| QuoteError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;

        atomic_write(path, content.as_bytes())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Quotes file location (default: the platform data dir).
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint URL used for both fetch and submit.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Sync loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between watch-mode sync cycles.
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

// Default value functions for serde
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_interval() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| QuoteError::Unsupported {
        feature: "config directory discovery".to_string(),
    })?;

    Ok(config_dir.join("quotekeep").join("config.toml"))
}
