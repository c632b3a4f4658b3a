//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cart_core::catalog::{CatalogSource, StaticCatalog};
use cart_core::{CartManager, CartPersistence, ChannelNotifier};
use cart_data::HttpCatalog;
use cart_store::FileStore;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::CliConfig;
use crate::output::Output;

/// Cart manager as the CLI runs it.
pub type Manager = CartManager<FileStore, ChannelNotifier>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["cart.toml", ".cart.toml", "cart.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Location of the durable store file.
    pub fn store_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.path)
    }

    /// Open the durable store.
    pub fn open_store(&self) -> Result<FileStore> {
        let path = self.store_path();
        FileStore::open(&path).with_context(|| format!("Failed to open store: {}", path.display()))
    }

    /// Cart persistence bound to the configured key, for direct store access.
    pub fn persistence(&self) -> Result<CartPersistence<FileStore>> {
        Ok(CartPersistence::new(
            self.open_store()?,
            self.config.storage.key.clone(),
        ))
    }

    /// Build a manager over the store, with its notification receiver.
    pub fn manager(&self) -> Result<(Manager, UnboundedReceiver<String>)> {
        let (notifier, rx) = ChannelNotifier::new();
        let manager = CartManager::new(self.open_store()?, notifier, self.config.cart_config());
        Ok((manager, rx))
    }

    /// Catalog source: a local fixture if configured, the HTTP API otherwise.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        if let Some(file) = &self.config.api.catalog_file {
            let path = self.resolve_path(file);
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            let catalog = StaticCatalog::from_json(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
            return Ok(Box::new(catalog));
        }

        let api = &self.config.api;
        let catalog = HttpCatalog::with_timeout(api.base_url.clone(), api.timeout())
            .context("Failed to build HTTP client")?;
        Ok(Box::new(catalog))
    }
}
