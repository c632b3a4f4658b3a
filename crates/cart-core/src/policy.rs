//! Stock validation policy.
//!
//! Every quantity the cart accepts is checked against the cached stock
//! snapshot. A table that has not loaded, or failed to load, never counts
//! as stock; the rejection says which of those it was so callers can tell
//! "not ready" apart from "confirmed sold out".

use std::num::NonZeroU32;

use thiserror::Error;

use crate::catalog::{Catalog, Stock, StockLookup};
use crate::ids::ProductId;

/// Why a quantity was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Stock table has not been fetched yet.
    #[error("stock for product {0} has not loaded yet")]
    StockPending(ProductId),

    /// Stock table failed to load this session.
    #[error("stock for product {0} is unavailable")]
    StockUnavailable(ProductId),

    /// Stock table has no row for the product.
    #[error("product {0} is not stocked")]
    NotStocked(ProductId),

    /// Requested more than the snapshot allows.
    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },
}

impl Rejection {
    pub fn product_id(&self) -> ProductId {
        match self {
            Rejection::StockPending(id)
            | Rejection::StockUnavailable(id)
            | Rejection::NotStocked(id) => *id,
            Rejection::InsufficientStock { product_id, .. } => *product_id,
        }
    }

    /// True when the stock table itself was not usable.
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            Rejection::StockPending(_) | Rejection::StockUnavailable(_)
        )
    }
}

/// Check that `requested` units of `id` fit in the stock snapshot.
pub fn check_quantity(catalog: &Catalog, id: ProductId, requested: u64) -> Result<Stock, Rejection> {
    match catalog.stock_for(id) {
        StockLookup::Pending => Err(Rejection::StockPending(id)),
        StockLookup::Unavailable => Err(Rejection::StockUnavailable(id)),
        StockLookup::Missing => Err(Rejection::NotStocked(id)),
        StockLookup::Found(stock) if !stock.is_out_of_stock() && stock.can_fulfill(requested) => {
            Ok(stock)
        }
        StockLookup::Found(stock) => Err(Rejection::InsufficientStock {
            product_id: id,
            requested,
            available: stock.amount,
        }),
    }
}

/// Amount an entry would have after one more unit is added.
///
/// `current` is the amount already in the cart, 0 if absent.
pub fn next_add_amount(catalog: &Catalog, id: ProductId, current: u32) -> Result<NonZeroU32, Rejection> {
    check_quantity(catalog, id, u64::from(current) + 1)?;
    Ok(NonZeroU32::MIN.saturating_add(current))
}

/// Validate an explicit amount requested for an entry.
pub fn check_update(catalog: &Catalog, id: ProductId, requested: u64) -> Result<NonZeroU32, Rejection> {
    let stock = check_quantity(catalog, id, requested)?;
    u32::try_from(requested)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(Rejection::InsufficientStock {
            product_id: id,
            requested,
            available: stock.amount,
        })
}
