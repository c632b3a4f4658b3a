//! Cart entry value type.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// A catalog product projected into the cart with a requested quantity.
///
/// Entries are values: fields are private and every change goes through a
/// constructor that returns a new entry. Nothing in the cart shares memory
/// with the catalog product it was projected from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    id: ProductId,
    title: String,
    price: f64,
    #[serde(default)]
    image: String,
    amount: NonZeroU32,
}

impl CartEntry {
    /// Project a catalog product into a fresh entry with amount 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            amount: NonZeroU32::MIN,
        }
    }

    /// Return a copy of this entry carrying `amount`.
    #[must_use]
    pub fn with_amount(&self, amount: NonZeroU32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Requested quantity, always at least 1.
    pub fn amount(&self) -> u32 {
        self.amount.get()
    }

    /// Unit price times amount.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product::new(ProductId::new(1), "Shoe", 100.0).with_image("shoe.jpg")
    }

    #[test]
    fn test_from_product() {
        let entry = CartEntry::from_product(&shoe());

        assert_eq!(entry.id(), ProductId::new(1));
        assert_eq!(entry.title(), "Shoe");
        assert_eq!(entry.image(), "shoe.jpg");
        assert_eq!(entry.amount(), 1);
    }

    #[test]
    fn test_with_amount_leaves_original() {
        let entry = CartEntry::from_product(&shoe());
        let bumped = entry.with_amount(NonZeroU32::new(3).unwrap());

        assert_eq!(entry.amount(), 1);
        assert_eq!(bumped.amount(), 3);
        assert_eq!(bumped.title(), entry.title());
    }

    #[test]
    fn test_projection_does_not_alias_catalog() {
        let mut product = shoe();
        let entry = CartEntry::from_product(&product);

        product.title.push_str(" (edited)");
        assert_eq!(entry.title(), "Shoe");
    }

    #[test]
    fn test_subtotal() {
        let entry = CartEntry::from_product(&shoe()).with_amount(NonZeroU32::new(4).unwrap());
        assert_eq!(entry.subtotal(), 400.0);
    }

    #[test]
    fn test_serialized_shape() {
        let entry = CartEntry::from_product(&shoe());
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "title": "Shoe",
                "price": 100.0,
                "image": "shoe.jpg",
                "amount": 1
            })
        );
    }

    #[test]
    fn test_zero_amount_rejected_on_decode() {
        let json = r#"{"id": 1, "title": "Shoe", "price": 100, "amount": 0}"#;
        assert!(serde_json::from_str::<CartEntry>(json).is_err());
    }
}
