//! HTTP client for the storefront catalog API.
//!
//! Provides a small JSON-over-HTTP client and [`HttpCatalog`], a
//! [`CatalogSource`](cart_core::catalog::CatalogSource) that reads products
//! and stock from a REST endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_data::HttpCatalog;
//!
//! let source = HttpCatalog::new("http://localhost:3333")?;
//! manager.load_catalog(&source).await;
//! ```

mod catalog;
mod error;
mod response;

pub use catalog::{HttpCatalog, PRODUCTS_PATH, STOCK_PATH};
pub use error::FetchError;
pub use response::Response;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for making outbound requests.
///
/// A thin wrapper around [`reqwest::Client`] that resolves paths against a
/// base URL and applies a timeout to every request.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self {
            client,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve `url` against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                let path = url.trim_start_matches('/');
                format!("{}/{}", base.trim_end_matches('/'), path)
            }
            _ => url.to_string(),
        }
    }

    /// Send a GET request and buffer the response.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let full_url = self.resolve(url);
        debug!(url = %full_url, "GET");

        let request = self
            .client
            .get(&full_url)
            .timeout(self.timeout)
            .header("Accept", "application/json");

        let response = Response::read(request.send().await?).await?;
        debug!(url = %full_url, status = response.status, "response");
        Ok(response)
    }

    /// GET `url` and decode a successful JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.get(url).await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpCatalog, Response};
}
