//! Product catalog module.
//!
//! Contains the catalog product type, the stock snapshot, and the cached
//! catalog the cart validates against.

mod load;
mod product;
mod source;
mod stock;

pub use load::{Catalog, LoadState, StockLookup};
pub use product::Product;
pub use source::{CatalogSource, StaticCatalog};
pub use stock::Stock;
