//! Cart write-through to a durable store.

use cart_store::KvStore;
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::error::CartError;

/// Reads and writes the serialized cart under a fixed key.
#[derive(Debug)]
pub struct CartPersistence<S> {
    store: S,
    key: String,
}

impl<S: KvStore> CartPersistence<S> {
    /// Bind a store to the key the cart lives under.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the persisted cart. `None` if nothing was ever saved.
    pub fn load(&self) -> Result<Option<Cart>, CartError> {
        Ok(self.store.get(&self.key)?)
    }

    /// Read the persisted cart, falling back to an empty one.
    ///
    /// A blob that cannot be read or decoded is logged and ignored.
    pub fn load_or_default(&self) -> Cart {
        match self.load() {
            Ok(Some(cart)) => {
                debug!(key = %self.key, entries = cart.len(), "restored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        }
    }

    /// Serialize `cart` and write it to the store.
    pub fn save(&mut self, cart: &Cart) -> Result<(), CartError> {
        self.store.set(&self.key, cart)?;
        debug!(key = %self.key, entries = cart.len(), "cart persisted");
        Ok(())
    }

    /// Delete the persisted cart.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.store.remove(&self.key)?;
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use cart_store::MemoryStore;

    use super::*;
    use crate::cart::CartEntry;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::DEFAULT_STORAGE_KEY;

    fn sample_cart() -> Cart {
        Cart::new()
            .with_entry(CartEntry::from_product(&Product::new(ProductId::new(1), "Shoe", 100.0)))
            .with_entry(CartEntry::from_product(&Product::new(ProductId::new(2), "Boot", 250.0)))
    }

    #[test]
    fn test_load_empty_store() {
        let persistence = CartPersistence::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        assert!(persistence.load().unwrap().is_none());
        assert!(persistence.load_or_default().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = CartPersistence::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        let cart = sample_cart();

        persistence.save(&cart).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(cart));
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_empty() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{oops");
        let persistence = CartPersistence::new(store, DEFAULT_STORAGE_KEY);

        assert!(matches!(
            persistence.load(),
            Err(CartError::Store(cart_store::StoreError::Serialize(_)))
        ));
        assert!(persistence.load_or_default().is_empty());
    }

    #[test]
    fn test_fractional_prices_read_back_exactly() {
        let mut persistence = CartPersistence::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        let cart = [57414.518664216484, 47960.756426982596, 27394.861362581578, 0.1 + 0.2]
            .iter()
            .enumerate()
            .fold(Cart::new(), |cart, (i, &price)| {
                let product = Product::new(ProductId::new(i as u64), "Shoe", price);
                cart.with_entry(CartEntry::from_product(&product))
            });

        persistence.save(&cart).unwrap();
        let loaded = persistence.load().unwrap().unwrap();

        for (saved, read) in cart.iter().zip(loaded.iter()) {
            assert_eq!(saved.price().to_bits(), read.price().to_bits());
        }
        assert_eq!(loaded, cart);
    }

    #[test]
    fn test_clear() {
        let mut persistence = CartPersistence::new(MemoryStore::new(), "cart");
        persistence.save(&sample_cart()).unwrap();
        persistence.clear().unwrap();

        assert!(persistence.store().is_empty());
    }
}
