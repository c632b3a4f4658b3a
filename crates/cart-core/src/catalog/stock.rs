//! Stock snapshot entry.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Maximum purchasable quantity for a product at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Product this stock level belongs to.
    pub id: ProductId,
    /// Units available.
    pub amount: u32,
}

impl Stock {
    /// Create a stock level.
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }

    /// Check if nothing can be bought.
    pub fn is_out_of_stock(&self) -> bool {
        self.amount == 0
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: u64) -> bool {
        quantity <= u64::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_fulfill() {
        let stock = Stock::new(ProductId::new(1), 5);
        assert!(stock.can_fulfill(5));
        assert!(!stock.can_fulfill(6));
        assert!(!stock.is_out_of_stock());
    }

    #[test]
    fn test_zero_stock() {
        let stock = Stock::new(ProductId::new(1), 0);
        assert!(stock.is_out_of_stock());
        assert!(!stock.can_fulfill(1));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result: Result<Stock, _> = serde_json::from_str(r#"{"id": 1, "amount": -3}"#);
        assert!(result.is_err());
    }
}
