//! Catalog source backed by the storefront REST API.

use std::time::Duration;

use async_trait::async_trait;
use cart_core::catalog::{CatalogSource, Product, Stock};
use cart_core::CartError;
use tracing::warn;

use crate::{FetchClient, FetchError};

/// Path of the product list.
pub const PRODUCTS_PATH: &str = "/products";

/// Path of the stock table.
pub const STOCK_PATH: &str = "/stock";

/// Reads products and stock from `GET /products` and `GET /stock`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Catalog rooted at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::from_client(FetchClient::new()?.with_base_url(base_url)))
    }

    /// Catalog rooted at `base_url` with a custom timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::from_client(
            FetchClient::new()?
                .with_base_url(base_url)
                .with_timeout(timeout),
        ))
    }

    pub fn from_client(client: FetchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

fn load_error(what: &str, e: FetchError) -> CartError {
    warn!(error = %e, "failed to fetch {}", what);
    CartError::CatalogLoad(format!("{}: {}", what, e))
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CartError> {
        self.client
            .get_json(PRODUCTS_PATH)
            .await
            .map_err(|e| load_error("products", e))
    }

    async fn fetch_stock(&self) -> Result<Vec<Stock>, CartError> {
        self.client
            .get_json(STOCK_PATH)
            .await
            .map_err(|e| load_error("stock", e))
    }
}
