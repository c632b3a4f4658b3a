//! Catalog-assigned product identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer product id, unique within the catalog.
///
/// Serializes as a bare number so cart and catalog JSON keep the shape the
/// storefront API uses (`{"id": 1, ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an id from its numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(7)), "7");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(" 12 ".parse::<ProductId>().unwrap(), ProductId::new(12));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id, ProductId::new(3));
    }
}
