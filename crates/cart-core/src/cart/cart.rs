//! Cart type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::error::CartError;
use crate::ids::ProductId;

/// An ordered sequence of cart entries, unique by product id.
///
/// All "mutators" return a new cart; the receiver is never changed. This is
/// what lets the manager persist the next state before installing it.
///
/// Serializes as a bare JSON array of entries. Decoding rejects arrays that
/// repeat a product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from entries, failing on duplicate ids.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(CartError::DuplicateEntry(entry.id()));
            }
        }
        Ok(Self { entries })
    }

    /// Return a cart where `entry` replaces the entry with the same id, or
    /// is appended if there is none.
    #[must_use]
    pub fn with_entry(&self, entry: CartEntry) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter().position(|e| e.id() == entry.id()) {
            Some(index) => entries[index] = entry,
            None => entries.push(entry),
        }
        Self { entries }
    }

    /// Return a cart without the entry for `id`.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| e.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// Get an entry by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Number of entries (distinct products).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across all entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.amount())).sum()
    }

    /// Sum of entry subtotals.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CartError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::catalog::Product;

    fn entry(id: u64, price: f64) -> CartEntry {
        CartEntry::from_product(&Product::new(ProductId::new(id), format!("Product {id}"), price))
    }

    fn amount(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_with_entry_appends() {
        let cart = Cart::new().with_entry(entry(1, 10.0)).with_entry(entry(2, 20.0));

        let ids: Vec<u64> = cart.iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_with_entry_replaces_in_place() {
        let cart = Cart::new().with_entry(entry(1, 10.0)).with_entry(entry(2, 20.0));
        let updated = cart.with_entry(entry(1, 10.0).with_amount(amount(3)));

        assert_eq!(updated.len(), 2);
        assert_eq!(updated.entries()[0].amount(), 3);
        assert_eq!(updated.entries()[0].id(), ProductId::new(1));
        // receiver untouched
        assert_eq!(cart.entries()[0].amount(), 1);
    }

    #[test]
    fn test_without() {
        let cart = Cart::new().with_entry(entry(1, 10.0)).with_entry(entry(2, 20.0));
        let removed = cart.without(ProductId::new(2));

        assert_eq!(removed.len(), 1);
        assert!(removed.contains(ProductId::new(1)));
        assert!(!removed.contains(ProductId::new(2)));
        assert_eq!(cart.without(ProductId::new(9)), cart);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .with_entry(entry(1, 10.0).with_amount(amount(2)))
            .with_entry(entry(2, 25.5));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 45.5);
    }

    #[test]
    fn test_duplicate_entries_rejected() {
        let result = Cart::from_entries(vec![entry(1, 10.0), entry(1, 10.0)]);
        assert!(matches!(result, Err(CartError::DuplicateEntry(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = Cart::new().with_entry(entry(1, 10.0));
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));

        let decoded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_decode_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "title": "A", "price": 1, "amount": 1},
            {"id": 1, "title": "A", "price": 1, "amount": 2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }
}
