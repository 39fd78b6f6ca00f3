//! Shared UI state.
//!
//! The [`Shop`] is the source of truth. After every action the cart and the
//! pending messages are copied into signals so views re-render.

use std::{fmt, time::Duration};

use leptos::prelude::*;
use shopfront::{
    cart::CartState,
    notifications::{Message, MessageId},
    products::{Product, ProductId},
    receipt::Receipt,
    shop::Shop,
};

use crate::storage::Backend;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Product listing
    Catalog,

    /// Cart contents
    Cart,

    /// Purchase confirmation
    Receipt,
}

/// Copyable handle views use to read and change the shop.
#[derive(Clone, Copy)]
pub struct ShopContext {
    shop: StoredValue<Shop<Backend>, LocalStorage>,

    /// Current cart
    pub cart: RwSignal<CartState>,

    /// Pending messages
    pub messages: RwSignal<Vec<Message>>,

    /// Screen being shown
    pub page: RwSignal<Page>,

    /// Receipt of the last completed checkout
    pub receipt: RwSignal<Option<Receipt>>,

    /// A checkout has started and not yet completed
    pub checking_out: RwSignal<bool>,
}

impl fmt::Debug for ShopContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopContext")
            .field("page", &self.page.get_untracked())
            .finish_non_exhaustive()
    }
}

/// What an action changed, read back out of the shop.
struct Outcome {
    cart: CartState,
    messages: Vec<Message>,
    checking_out: bool,
    expiring: Vec<(MessageId, Duration)>,
}

impl ShopContext {
    /// Wrap `shop` and mirror its state into fresh signals.
    pub fn new(shop: Shop<Backend>) -> Self {
        let cart = RwSignal::new(shop.cart().clone());
        let messages = RwSignal::new(shop.messages().to_vec());

        Self {
            shop: StoredValue::new_local(shop),
            cart,
            messages,
            page: RwSignal::new(Page::Catalog),
            receipt: RwSignal::new(None),
            checking_out: RwSignal::new(false),
        }
    }

    fn run<T>(self, action: impl FnOnce(&mut Shop<Backend>) -> T) -> Option<T> {
        let known: Vec<MessageId> = self
            .messages
            .with_untracked(|messages| messages.iter().map(|m| m.id.clone()).collect());

        let (value, outcome) = self.shop.try_update_value(|shop| {
            let value = action(shop);

            let expiring = shop
                .messages()
                .iter()
                .filter(|message| !known.contains(&message.id))
                .map(|message| {
                    (
                        message.id.clone(),
                        shop.notifier().display_duration(message),
                    )
                })
                .collect();

            let outcome = Outcome {
                cart: shop.cart().clone(),
                messages: shop.messages().to_vec(),
                checking_out: shop.is_checking_out(),
                expiring,
            };

            (value, outcome)
        })?;

        self.cart.set(outcome.cart);
        self.messages.set(outcome.messages);
        self.checking_out.set(outcome.checking_out);

        for (id, duration) in outcome.expiring {
            set_timeout(move || self.hide_message(&id), duration);
        }

        Some(value)
    }

    /// Add one unit of `product`.
    pub fn add(self, product: Product) {
        self.run(|shop| {
            shop.add(product);
        });
    }

    /// Remove the line for `id`.
    pub fn remove(self, id: ProductId) {
        self.run(|shop| {
            shop.remove(id);
        });
    }

    /// Change the quantity for `id`.
    pub fn set_quantity(self, id: ProductId, quantity: i64) {
        self.run(|shop| {
            shop.set_quantity(id, quantity);
        });
    }

    /// Empty the cart.
    pub fn clear(self) {
        self.run(|shop| {
            shop.clear();
        });
    }

    /// Announce checkout, then show the receipt once the message expires.
    /// Does nothing while an earlier checkout is still pending.
    pub fn checkout(self) {
        let delay = self.run(|shop| shop.checkout().map(|_| shop.notifier().defaults().checkout()));

        if let Some(Some(delay)) = delay {
            set_timeout(move || self.complete_checkout(), delay);
        }
    }

    fn complete_checkout(self) {
        if let Some(receipt) = self.run(Shop::complete_checkout) {
            self.receipt.set(Some(receipt));
            self.page.set(Page::Receipt);
        }
    }

    /// Dismiss a message.
    pub fn hide_message(self, id: &MessageId) {
        self.run(|shop| shop.hide_message(id));
    }

    /// Switch screens.
    pub fn show(self, page: Page) {
        self.page.set(page);
    }
}
