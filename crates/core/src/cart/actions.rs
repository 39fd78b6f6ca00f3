//! Cart actions and the transition function.

use crate::products::{Product, ProductId};

use super::{CartItem, CartState};

/// A requested change to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product, appending a new line if needed.
    AddItem(Product),

    /// Drop the line for a product.
    RemoveItem(ProductId),

    /// Set a line's quantity exactly. Zero or less removes the line.
    SetQuantity {
        /// Product whose line changes
        id: ProductId,

        /// Requested absolute quantity
        quantity: i64,
    },

    /// Empty the cart.
    ClearCart,
}

impl CartAction {
    /// Rewrite a non-positive `SetQuantity` as the `RemoveItem` it stands for.
    ///
    /// Every caller goes through this before acting, so the reducer and the
    /// notification-aware layer agree on what a quantity of zero means.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::SetQuantity { id, quantity } if quantity <= 0 => Self::RemoveItem(id),
            other => other,
        }
    }
}

/// Apply `action` to `state`, producing the next state.
///
/// Pure: no I/O and no mutation of `state`. Unknown ids are no-ops.
pub fn transition(state: &CartState, action: CartAction) -> CartState {
    match action.normalized() {
        CartAction::AddItem(product) => {
            let mut items = state.items.clone();

            if let Some(item) = items.iter_mut().find(|item| item.id() == product.id) {
                item.quantity = item.quantity.saturating_add(1);
            } else {
                items.push(CartItem {
                    product,
                    quantity: 1,
                });
            }

            CartState::from_items(items)
        }
        CartAction::RemoveItem(id) => CartState::from_items(
            state
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        ),
        CartAction::SetQuantity { id, quantity } => {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

            CartState::from_items(
                state
                    .items
                    .iter()
                    .map(|item| {
                        if item.id() == id {
                            CartItem {
                                product: item.product.clone(),
                                quantity,
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
            )
        }
        CartAction::ClearCart => CartState::empty(),
    }
}

#[cfg(test)]
mod tests {
    use crate::tags::TagSet;

    use super::*;

    fn product(id: u64, price: &str) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Future self #{id}"),
            description: String::new(),
            price: price.to_string(),
            tags: TagSet::new(),
            gradient: String::new(),
        }
    }

    fn apply(actions: impl IntoIterator<Item = CartAction>) -> CartState {
        actions
            .into_iter()
            .fold(CartState::empty(), |state, action| transition(&state, action))
    }

    #[test]
    fn add_to_empty_cart_creates_single_line() {
        let state = apply([CartAction::AddItem(product(1, "NT$100"))]);

        assert_eq!(state.len(), 1);
        assert_eq!(state.item(ProductId(1)).map(CartItem::quantity), Some(1));
        assert_eq!(state.total_price(), 100);
    }

    #[test]
    fn adding_same_product_twice_increments_quantity() {
        let state = apply([
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::AddItem(product(1, "NT$100")),
        ]);

        assert_eq!(state.len(), 1);
        assert_eq!(state.total_quantity(), 2);
        assert_eq!(state.total_price(), 200);
    }

    #[test]
    fn add_appends_new_products_in_order() {
        let state = apply([
            CartAction::AddItem(product(3, "NT$1")),
            CartAction::AddItem(product(1, "NT$1")),
            CartAction::AddItem(product(3, "NT$1")),
            CartAction::AddItem(product(2, "NT$1")),
        ]);

        let ids: Vec<_> = state.items().iter().map(CartItem::id).collect();

        assert_eq!(ids, [ProductId(3), ProductId(1), ProductId(2)]);
    }

    #[test]
    fn remove_unknown_id_leaves_state_unchanged() {
        let before = apply([CartAction::AddItem(product(1, "NT$100"))]);
        let after = transition(&before, CartAction::RemoveItem(ProductId(99)));

        assert_eq!(before, after);
    }

    #[test]
    fn remove_keeps_other_lines() {
        let before = apply([
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::AddItem(product(2, "NT$50")),
        ]);
        let after = transition(&before, CartAction::RemoveItem(ProductId(1)));

        assert_eq!(after.len(), 1);
        assert_eq!(after.total_price(), 50);
        assert_eq!(before.len(), 2, "transition must not touch its input");
    }

    #[test]
    fn set_quantity_is_absolute() {
        let state = apply([
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::SetQuantity {
                id: ProductId(1),
                quantity: 5,
            },
        ]);

        assert_eq!(state.total_quantity(), 5);
        assert_eq!(state.total_price(), 500);
    }

    #[test]
    fn set_quantity_zero_matches_remove() {
        let base = apply([
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::AddItem(product(2, "NT$10")),
        ]);

        let via_zero = transition(
            &base,
            CartAction::SetQuantity {
                id: ProductId(1),
                quantity: 0,
            },
        );
        let via_negative = transition(
            &base,
            CartAction::SetQuantity {
                id: ProductId(1),
                quantity: -3,
            },
        );
        let via_remove = transition(&base, CartAction::RemoveItem(ProductId(1)));

        assert_eq!(via_zero, via_remove);
        assert_eq!(via_negative, via_remove);
    }

    #[test]
    fn set_quantity_unknown_id_is_noop() {
        let before = apply([CartAction::AddItem(product(1, "NT$100"))]);
        let after = transition(
            &before,
            CartAction::SetQuantity {
                id: ProductId(5),
                quantity: 3,
            },
        );

        assert_eq!(before, after);
    }

    #[test]
    fn set_quantity_saturates_at_u32_max() {
        let state = apply([
            CartAction::AddItem(product(1, "NT$0")),
            CartAction::SetQuantity {
                id: ProductId(1),
                quantity: i64::MAX,
            },
        ]);

        assert_eq!(state.total_quantity(), u64::from(u32::MAX));
    }

    #[test]
    fn clear_returns_canonical_empty_state() {
        let state = apply([
            CartAction::AddItem(product(1, "NT$100")),
            CartAction::AddItem(product(2, "NT$100")),
            CartAction::ClearCart,
        ]);

        assert_eq!(state, CartState::empty());
    }

    #[test]
    fn normalized_only_rewrites_non_positive_quantities() {
        let id = ProductId(4);

        assert_eq!(
            CartAction::SetQuantity { id, quantity: 0 }.normalized(),
            CartAction::RemoveItem(id)
        );
        assert_eq!(
            CartAction::SetQuantity { id, quantity: 2 }.normalized(),
            CartAction::SetQuantity { id, quantity: 2 }
        );
        assert_eq!(CartAction::ClearCart.normalized(), CartAction::ClearCart);
    }
}
