//! Durable key-value storage for the shopping cart.
//!
//! Provides a small, synchronous key-value API with automatic JSON
//! serialization, plus two backends:
//!
//! - [`MemoryStore`] - process-local map, used in tests and dry runs
//! - [`FileStore`] - JSON file on disk, rewritten atomically on every save
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_store::{FileStore, KvStore};
//!
//! let mut store = FileStore::open("cart.json")?;
//!
//! // Store a value
//! store.set("@RocketShoes:cart", &entries)?;
//!
//! // Retrieve a value
//! let entries: Option<Vec<Entry>> = store.get("@RocketShoes:cart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KvStore, MemoryStore, StoreError};
}
