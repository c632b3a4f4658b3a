//! Key-value store trait with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// A synchronous string key-value store.
///
/// Backends only implement raw string access; `get` and `set` layer JSON
/// serialization on top for any type that implements `Serialize` and
/// `DeserializeOwned`.
pub trait KvStore {
    /// Load the raw value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a raw value under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists in the store.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.load(key)?.is_some())
    }

    /// Get a value from the store and decode it from JSON.
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<CartEntry>> = store.get("@RocketShoes:cart")?;
    /// ```
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.load(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and store it.
    ///
    /// ```rust,ignore
    /// store.set("@RocketShoes:cart", &cart)?;
    /// ```
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.save(key, &raw)
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
