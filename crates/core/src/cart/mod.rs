//! Cart
//!
//! The cart is an ordered list of product lines plus two aggregates that are
//! always derived from the lines. States are values: every transition builds
//! a new [`CartState`] and never edits the previous one.

use serde::{Deserialize, Serialize};

use crate::{
    pricing::line_total,
    products::{Product, ProductId},
};

mod actions;

pub use actions::{CartAction, transition};

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product snapshot taken when the line was created
    #[serde(flatten)]
    pub(crate) product: Product,

    /// Units of the product, always at least one
    pub(crate) quantity: u32,
}

impl CartItem {
    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Product identifier.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Product title.
    pub fn title(&self) -> &str {
        &self.product.title
    }

    /// Units of the product in the cart.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> u64 {
        line_total(&self.product.price, self.quantity)
    }
}

/// Cart contents and their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total_quantity: u64,
    total_price: u64,
}

impl CartState {
    /// The canonical empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from its lines, deriving both totals.
    pub(crate) fn from_items(items: Vec<CartItem>) -> Self {
        let total_quantity = items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(u64::from(item.quantity)));

        let total_price = items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(item.line_total()));

        Self {
            items,
            total_quantity,
            total_price,
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Find the line for a product.
    pub fn item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}
