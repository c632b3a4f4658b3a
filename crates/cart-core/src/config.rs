//! Cart configuration.

use serde::{Deserialize, Serialize};

use crate::notify::Locale;

/// Store key the cart is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Runtime configuration for a [`CartManager`](crate::CartManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the serialized cart lives under in the durable store.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Language of user-facing notifications.
    #[serde(default)]
    pub locale: Locale,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            locale: Locale::default(),
        }
    }
}

impl CartConfig {
    /// Set the notification locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
