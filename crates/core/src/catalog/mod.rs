//! Catalog
//!
//! The read-only product list the storefront sells from, plus the helpers
//! views use to narrow and page through it.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::products::{Product, ProductId};

pub mod filter;
pub mod pagination;

pub use filter::{distinct_tags, filter_by_tags};
pub use pagination::{Pager, paginate};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing error
    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two products share an id
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    products: Vec<Product>,
}

/// Products in display order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Parse a `products:` YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or ids repeat.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let catalog = Self::new(fixture.products)?;

        debug!(products = catalog.len(), "loaded catalog");

        Ok(catalog)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The first `count` products, as shown on the landing strip.
    pub fn featured(&self, count: usize) -> &[Product] {
        self.products
            .get(..count.min(self.products.len()))
            .unwrap_or_default()
    }

    /// Sorted union of every product's tags.
    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.products)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const YAML: &str = r#"
products:
  - id: 3
    title: Moon Lamp
    price: "NT$1,200"
    tags: [space, lamp]
  - id: 1
    title: Rocket Mug
    price: "NT$450"
    tags: [space, kitchen]
  - id: 2
    title: Tea Towel
    price: "NT$180"
"#;

    #[test]
    fn from_yaml_keeps_display_order() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.len(), 3);

        Ok(())
    }

    #[test]
    fn get_finds_products_by_id() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        assert_eq!(
            catalog.get(ProductId(1)).map(|p| p.title.as_str()),
            Some("Rocket Mug")
        );
        assert!(catalog.get(ProductId(99)).is_none());

        Ok(())
    }

    #[test]
    fn featured_is_clipped_to_catalog_size() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        assert_eq!(catalog.featured(2).len(), 2);
        assert_eq!(catalog.featured(10).len(), 3);
        assert!(catalog.featured(0).is_empty());

        Ok(())
    }

    #[test]
    fn tags_are_sorted_and_distinct() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        assert_eq!(catalog.tags(), vec!["kitchen", "lamp", "space"]);

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = r#"
products:
  - { id: 1, title: A, price: "1" }
  - { id: 1, title: B, price: "2" }
"#;

        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::DuplicateProduct(ProductId(1)))
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            Catalog::from_yaml("products: [ { id: "),
            Err(CatalogError::Yaml(_))
        ));
    }
}
