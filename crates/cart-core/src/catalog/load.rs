//! Cached catalog with explicit readiness.

use tracing::{debug, warn};

use crate::catalog::{CatalogSource, Product, Stock};
use crate::error::CartError;
use crate::ids::ProductId;

/// Readiness of one cached slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Fetch has not completed yet.
    #[default]
    Pending,
    /// Fetch completed with data.
    Loaded(T),
    /// Fetch failed; the slot stays empty for the session.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Build a state from a finished fetch.
    pub fn from_result(result: Result<T, CartError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    /// Get the loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// Result of looking up a product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLookup {
    /// Stock table has not been fetched yet.
    Pending,
    /// Stock fetch failed.
    Unavailable,
    /// Table is loaded but has no row for the product.
    Missing,
    /// Stock row for the product.
    Found(Stock),
}

/// Products and stock cached for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: LoadState<Vec<Product>>,
    stock: LoadState<Vec<Stock>>,
}

impl Catalog {
    /// Create a catalog whose slots are both pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fully loaded catalog.
    pub fn from_parts(products: Vec<Product>, stock: Vec<Stock>) -> Self {
        Self {
            products: LoadState::Loaded(products),
            stock: LoadState::Loaded(stock),
        }
    }

    /// Fetch products and stock concurrently from `source`.
    ///
    /// Neither fetch waits on the other; each result fills its own slot.
    pub async fn load<C: CatalogSource + ?Sized>(source: &C) -> Self {
        let (products, stock) = futures::join!(source.fetch_products(), source.fetch_stock());

        let mut catalog = Self::new();
        catalog.set_products(products);
        catalog.set_stock(stock);
        catalog
    }

    /// Install the result of a products fetch.
    pub fn set_products(&mut self, result: Result<Vec<Product>, CartError>) {
        match &result {
            Ok(products) => debug!(count = products.len(), "catalog products loaded"),
            Err(e) => warn!(error = %e, "catalog products failed to load"),
        }
        self.products = LoadState::from_result(result);
    }

    /// Install the result of a stock fetch.
    pub fn set_stock(&mut self, result: Result<Vec<Stock>, CartError>) {
        match &result {
            Ok(stock) => debug!(count = stock.len(), "stock table loaded"),
            Err(e) => warn!(error = %e, "stock table failed to load"),
        }
        self.stock = LoadState::from_result(result);
    }

    pub fn products(&self) -> &LoadState<Vec<Product>> {
        &self.products
    }

    pub fn stock(&self) -> &LoadState<Vec<Stock>> {
        &self.stock
    }

    /// Both slots loaded successfully.
    pub fn is_ready(&self) -> bool {
        self.products.is_loaded() && self.stock.is_loaded()
    }

    /// Find a catalog product. Pending or failed slots find nothing.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.loaded()?.iter().find(|p| p.id == id)
    }

    /// Look up the stock row for a product.
    pub fn stock_for(&self, id: ProductId) -> StockLookup {
        match &self.stock {
            LoadState::Pending => StockLookup::Pending,
            LoadState::Failed(_) => StockLookup::Unavailable,
            LoadState::Loaded(rows) => rows
                .iter()
                .find(|s| s.id == id)
                .copied()
                .map_or(StockLookup::Missing, StockLookup::Found),
        }
    }
}
