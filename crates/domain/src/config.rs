//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_PORT, STORAGE_KEY};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub backend: BackendConfig,
    pub server: ServerConfig,
}

/// Local state persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted state blob.
    pub data_dir: String,
    /// File stem for the blob; the fixed storage key by default.
    pub storage_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: ".".to_string(), storage_key: STORAGE_KEY.to_string() }
    }
}

/// Which collection backend serves queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    #[default]
    Local,
    Remote,
}

/// Collection backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub mode: BackendMode,
    /// Base URL of the hosted backend (remote mode only).
    pub base_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mode: BackendMode::Local,
            base_url: None,
            api_key: None,
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: DEFAULT_SERVER_PORT }
    }
}
