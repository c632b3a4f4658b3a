//! Catalog product type.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A product in the catalog.
///
/// Reference data only: catalog products carry no quantity. The cart holds
/// [`CartEntry`](crate::cart::CartEntry) projections instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in store currency.
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Create a product without an image.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: String::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": 1,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://example.com/shoe.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, 179.9);
        assert_eq!(product.image, "https://example.com/shoe.jpg");
    }

    #[test]
    fn test_ignores_amount_field() {
        let json = r#"{"id": 2, "title": "Shoe", "price": 100, "amount": 4}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, Product::new(ProductId::new(2), "Shoe", 100.0));
    }
}
