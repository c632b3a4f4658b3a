//! Shopping cart state machine for the Rocketshoes storefront.
//!
//! This crate owns the cart and everything that keeps it honest:
//!
//! - **Catalog**: products, stock snapshot, and the one-shot async loader
//! - **Cart**: immutable cart entries and the ordered, id-unique cart
//! - **Policy**: stock validation for add and update
//! - **Persistence**: JSON write-through to a [`cart_store::KvStore`]
//! - **Manager**: [`CartManager`], the single owner exposing the operations
//! - **View**: the header badge derived from a cart
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_core::prelude::*;
//! use cart_store::MemoryStore;
//!
//! let mut manager = CartManager::new(MemoryStore::new(), TracingNotifier, CartConfig::default());
//!
//! manager.load_catalog(&source).await;
//!
//! manager.add_product(ProductId::new(1));
//! manager.update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3));
//!
//! println!("{}", manager.badge().label());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod notify;
pub mod persist;
pub mod policy;
pub mod view;

pub mod cart;
pub mod catalog;
pub mod manager;

pub use cart::{Cart, CartEntry};
pub use config::{CartConfig, DEFAULT_STORAGE_KEY};
pub use error::CartError;
pub use ids::ProductId;
pub use manager::{CartManager, IgnoreReason, Outcome, UpdateProductAmount};
pub use notify::{ChannelNotifier, Locale, Notice, Notifier, TracingNotifier};
pub use persist::CartPersistence;
pub use policy::Rejection;
pub use view::CartBadge;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CartConfig, DEFAULT_STORAGE_KEY};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogSource, LoadState, Product, StaticCatalog, Stock, StockLookup,
    };

    // Cart
    pub use crate::cart::{Cart, CartEntry};

    // Manager
    pub use crate::manager::{CartManager, IgnoreReason, Outcome, UpdateProductAmount};
    pub use crate::notify::{ChannelNotifier, Locale, Notice, Notifier, TracingNotifier};
    pub use crate::persist::CartPersistence;
    pub use crate::policy::Rejection;
    pub use crate::view::CartBadge;
}
