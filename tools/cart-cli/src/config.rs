//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use cart_core::{CartConfig, Locale, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Durable store configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart behavior.
    #[serde(default)]
    pub cart: CartSection,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Cart manager configuration derived from the file.
    pub fn cart_config(&self) -> CartConfig {
        CartConfig {
            storage_key: self.storage.key.clone(),
            locale: self.cart.locale,
        }
    }
}

/// Catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving `/products` and `/stock`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Read the catalog from a local JSON fixture instead of the API.
    #[serde(default)]
    pub catalog_file: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            catalog_file: None,
        }
    }
}

/// Durable store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Key the cart is saved under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_store_path() -> String {
    ".rocketshoes/store.json".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key: default_storage_key(),
        }
    }
}

/// Cart behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSection {
    /// Notification language (`en` or `pt-BR`).
    #[serde(default)]
    pub locale: Locale,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
