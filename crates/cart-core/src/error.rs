//! Cart error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors raised inside cart operations.
///
/// None of these cross a [`CartManager`](crate::CartManager) operation; the
/// manager turns them into an [`Outcome`](crate::Outcome) and a notification.
#[derive(Error, Debug)]
pub enum CartError {
    /// Store read or write failed.
    #[error("Store error: {0}")]
    Store(#[from] cart_store::StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Catalog or stock fetch failed.
    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    /// Persisted cart contains the same product twice.
    #[error("Duplicate cart entry for product {0}")]
    DuplicateEntry(ProductId),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}
