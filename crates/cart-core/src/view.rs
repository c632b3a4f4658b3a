//! Header badge derived from the cart.

use std::collections::HashSet;
use std::fmt;

use crate::cart::Cart;

/// Count of distinct products in a cart, as shown in the storefront header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    count: usize,
}

impl CartBadge {
    /// Count distinct product ids in `cart`. Amounts are not summed.
    pub fn from_cart(cart: &Cart) -> Self {
        let distinct: HashSet<_> = cart.iter().map(|e| e.id()).collect();
        Self {
            count: distinct.len(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `"1 item"` for exactly one product, `"{n} itens"` otherwise.
    pub fn label(&self) -> String {
        if self.count == 1 {
            "1 item".to_string()
        } else {
            format!("{} itens", self.count)
        }
    }
}

impl fmt::Display for CartBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::cart::CartEntry;
    use crate::catalog::Product;
    use crate::ids::ProductId;

    fn entry(id: u64) -> CartEntry {
        CartEntry::from_product(&Product::new(ProductId::new(id), "Shoe", 10.0))
    }

    #[test]
    fn test_empty_cart() {
        let badge = CartBadge::from_cart(&Cart::new());
        assert_eq!(badge.count(), 0);
        assert_eq!(badge.label(), "0 itens");
    }

    #[test]
    fn test_single_item() {
        let cart = Cart::new().with_entry(entry(1).with_amount(NonZeroU32::new(3).unwrap()));
        assert_eq!(CartBadge::from_cart(&cart).label(), "1 item");
    }

    #[test]
    fn test_counts_distinct_ids_not_amounts() {
        let cart = Cart::new()
            .with_entry(entry(1).with_amount(NonZeroU32::new(4).unwrap()))
            .with_entry(entry(2));

        let badge = CartBadge::from_cart(&cart);
        assert_eq!(badge.count(), 2);
        assert_eq!(badge.to_string(), "2 itens");
    }
}
