//! Products

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{pricing::parse_numeric, tags::TagSet};

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Product
///
/// Read-only reference data from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Currency-formatted price, e.g. `"NT$1,200"`
    pub price: String,

    /// Product tags
    #[serde(default)]
    pub tags: TagSet,

    /// CSS gradient used as the card background
    #[serde(default)]
    pub gradient: String,
}

impl Product {
    /// Numeric value of the price string.
    pub fn unit_price(&self) -> u64 {
        parse_numeric(&self.price)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_with_optional_fields_missing() -> TestResult {
        let product: Product =
            serde_json::from_str(r#"{ "id": 7, "title": "Pilot", "price": "NT$2,400" }"#)?;

        assert_eq!(product.id, ProductId(7));
        assert!(product.tags.is_empty());
        assert!(product.description.is_empty());
        assert_eq!(product.unit_price(), 2400);

        Ok(())
    }

    #[test]
    fn id_serializes_as_bare_integer() -> TestResult {
        assert_eq!(serde_json::to_string(&ProductId(42))?, "42");
        assert_eq!(ProductId(42).to_string(), "42");

        Ok(())
    }
}
