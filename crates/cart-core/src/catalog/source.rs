//! Catalog source seam.

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::{Product, Stock};
use crate::error::CartError;

/// Supplies the product list and the stock table.
///
/// Each call is a one-shot fetch with no retry; an error leaves the
/// corresponding catalog slot failed.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every catalog product.
    async fn fetch_products(&self) -> Result<Vec<Product>, CartError>;

    /// Fetch the stock table.
    async fn fetch_stock(&self) -> Result<Vec<Stock>, CartError>;
}

/// Catalog source over data already in memory.
///
/// Deserializes from the storefront's fixture shape
/// (`{"products": [...], "stock": [...]}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stock: Vec<Stock>,
}

impl StaticCatalog {
    /// Create a source from products and stock.
    pub fn new(products: Vec<Product>, stock: Vec<Stock>) -> Self {
        Self { products, stock }
    }

    /// Parse a fixture document.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CartError> {
        Ok(self.products.clone())
    }

    async fn fetch_stock(&self) -> Result<Vec<Stock>, CartError> {
        Ok(self.stock.clone())
    }
}
