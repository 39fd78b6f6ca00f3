//! Receipt

use crate::cart::{CartItem, CartState};

/// What the customer bought, captured when checkout completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    items: Vec<CartItem>,
    total_quantity: u64,
    total_price: u64,
}

impl Receipt {
    /// Snapshot the lines and totals of `state`.
    pub fn from_cart(state: CartState) -> Self {
        let total_quantity = state.total_quantity();
        let total_price = state.total_price();

        Self {
            items: state.into_items(),
            total_quantity,
            total_price,
        }
    }

    /// Purchased lines in cart order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units purchased.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Total amount paid.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Check whether nothing was purchased.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Titles of the purchased products.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(CartItem::title)
    }

    /// Titles joined by `separator`.
    pub fn summary(&self, separator: &str) -> String {
        self.titles().collect::<Vec<_>>().join(separator)
    }
}

impl From<CartState> for Receipt {
    fn from(state: CartState) -> Self {
        Self::from_cart(state)
    }
}
