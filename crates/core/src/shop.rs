//! Shop
//!
//! The layer UI events call into. It pairs each cart action with the
//! message the customer sees and owns the checkout flow. Messages are
//! raised here, next to the dispatch, never inside the reducer.

use tracing::{debug, info};

use crate::{
    cart::{CartAction, CartState},
    config::{CheckoutPolicy, ShopConfig},
    notifications::{Message, MessageId, NotificationDefaults, Notifier, cart as texts},
    products::{Product, ProductId},
    receipt::Receipt,
    storage::{CartPersistence, KeyValueStore},
    store::CartStore,
};

/// Cart store, notifier and checkout policy behind one handle.
#[derive(Debug)]
pub struct Shop<S> {
    store: CartStore<S>,
    notifier: Notifier,
    checkout_policy: CheckoutPolicy,
    checking_out: bool,
}

impl<S: KeyValueStore> Shop<S> {
    /// Rehydrate the cart from `backend` with default settings.
    pub fn new(backend: S) -> Self {
        Self::with_parts(
            CartPersistence::new(backend),
            NotificationDefaults::default(),
            CheckoutPolicy::default(),
        )
    }

    /// Rehydrate the cart from `backend` using `config`.
    pub fn from_config(backend: S, config: &ShopConfig) -> Self {
        Self::with_parts(
            CartPersistence::with_key(backend, config.storage_key.as_str()),
            config.notifications,
            config.checkout,
        )
    }

    /// Assemble a shop from explicit parts.
    pub fn with_parts(
        persistence: CartPersistence<S>,
        notifications: NotificationDefaults,
        checkout_policy: CheckoutPolicy,
    ) -> Self {
        Self {
            store: CartStore::init(persistence),
            notifier: Notifier::new(notifications),
            checkout_policy,
            checking_out: false,
        }
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: Product) -> &CartState {
        let message = texts::added(&product.title);

        self.store.dispatch(CartAction::AddItem(product));
        self.notifier.success(message);

        self.store.state()
    }

    /// Drop the line for `id`.
    ///
    /// The message names the product as it was before removal, falling back
    /// to a placeholder for ids not in the cart.
    pub fn remove(&mut self, id: ProductId) -> &CartState {
        let title = self
            .store
            .state()
            .item(id)
            .map_or_else(|| texts::UNKNOWN_ITEM.to_string(), |item| item.title().to_string());

        self.store.dispatch(CartAction::RemoveItem(id));
        self.notifier.success(texts::removed(&title));

        self.store.state()
    }

    /// Set the quantity for `id`. Zero or less removes the line, with the
    /// same message as [`Shop::remove`].
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> &CartState {
        match (CartAction::SetQuantity { id, quantity }).normalized() {
            CartAction::RemoveItem(id) => self.remove(id),
            action => {
                self.store.dispatch(action);
                self.store.state()
            }
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &CartState {
        self.store.dispatch(CartAction::ClearCart);
        self.notifier.success(texts::cleared());

        self.store.state()
    }

    /// Announce that checkout has started. The cart is left untouched.
    ///
    /// Returns `None` without raising a message while an earlier checkout
    /// has not been completed.
    pub fn checkout(&mut self) -> Option<MessageId> {
        if self.checking_out {
            debug!("checkout already pending");
            return None;
        }

        self.checking_out = true;
        let duration = self.notifier.defaults().checkout();

        Some(self.notifier.loading(texts::checking_out(), Some(duration)))
    }

    /// Take the receipt, then apply the checkout policy.
    pub fn complete_checkout(&mut self) -> Receipt {
        self.checking_out = false;
        let receipt = Receipt::from_cart(self.store.state().clone());

        info!(
            lines = receipt.items().len(),
            total_quantity = receipt.total_quantity(),
            total_price = receipt.total_price(),
            "checkout completed"
        );

        if self.checkout_policy == CheckoutPolicy::ClearCart {
            self.store.dispatch(CartAction::ClearCart);
        }

        receipt
    }

    /// Hide one message.
    pub fn hide_message(&mut self, id: &MessageId) {
        self.notifier.hide(id);
    }

    /// Hide every message.
    pub fn clear_messages(&mut self) {
        self.notifier.clear_all();
    }

    /// Current cart state.
    pub fn cart(&self) -> &CartState {
        self.store.state()
    }

    /// Pending messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        self.notifier.messages()
    }

    /// The message queue.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether a checkout has started and not yet completed.
    pub fn is_checking_out(&self) -> bool {
        self.checking_out
    }

    /// The checkout policy in effect.
    pub fn checkout_policy(&self) -> CheckoutPolicy {
        self.checkout_policy
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::{notifications::MessageKind, storage::MemoryStore, tags::TagSet};

    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            description: String::new(),
            price: "NT$100".to_string(),
            tags: TagSet::new(),
            gradient: String::new(),
        }
    }

    fn contents(shop: &Shop<MemoryStore>) -> Vec<(MessageKind, &str)> {
        shop.messages()
            .iter()
            .map(|message| (message.kind, message.content.as_str()))
            .collect()
    }

    #[test]
    fn add_notifies_with_title() {
        let mut shop = Shop::new(MemoryStore::new());

        shop.add(product(1, "Astronaut"));

        assert_eq!(
            contents(&shop),
            vec![(MessageKind::Success, texts::added("Astronaut").as_str())]
        );
    }

    #[test]
    fn remove_names_product_before_removal() {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        shop.clear_messages();

        let state = shop.remove(ProductId(1));

        assert!(state.is_empty());
        assert_eq!(
            contents(&shop),
            vec![(MessageKind::Success, texts::removed("Astronaut").as_str())]
        );
    }

    #[test]
    fn removing_unknown_id_uses_placeholder() {
        let mut shop = Shop::new(MemoryStore::new());

        shop.remove(ProductId(9));

        assert_eq!(
            contents(&shop),
            vec![(MessageKind::Success, texts::removed("item").as_str())]
        );
    }

    #[test]
    fn zero_quantity_takes_the_remove_path() {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        shop.clear_messages();

        shop.set_quantity(ProductId(1), 0);

        assert!(shop.cart().is_empty());
        assert_eq!(
            contents(&shop),
            vec![(MessageKind::Success, texts::removed("Astronaut").as_str())]
        );
    }

    #[test]
    fn positive_quantity_is_silent() {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        shop.clear_messages();

        shop.set_quantity(ProductId(1), 4);

        assert_eq!(shop.cart().total_quantity(), 4);
        assert!(shop.messages().is_empty());
    }

    #[test]
    fn checkout_announces_without_touching_cart() -> TestResult {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));

        let id = shop.checkout().ok_or("checkout refused")?;

        let message = shop.notifier().get(&id);

        assert_eq!(message.map(|m| m.kind), Some(MessageKind::Loading));
        assert_eq!(
            message.map(|m| shop.notifier().display_duration(m)),
            Some(Duration::from_millis(3_000))
        );
        assert_eq!(shop.cart().total_quantity(), 1);
        assert!(shop.is_checking_out());

        Ok(())
    }

    #[test]
    fn second_checkout_is_refused_until_completed() -> TestResult {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        shop.clear_messages();

        let first = shop.checkout().ok_or("checkout refused")?;

        assert_eq!(shop.checkout(), None);
        assert_eq!(
            contents(&shop),
            vec![(MessageKind::Loading, texts::checking_out().as_str())]
        );

        let receipt = shop.complete_checkout();

        assert_eq!(receipt.total_quantity(), 1);
        assert!(!shop.is_checking_out());

        shop.hide_message(&first);
        shop.add(product(2, "Comet"));

        assert!(shop.checkout().is_some());

        Ok(())
    }

    #[test]
    fn complete_checkout_clears_by_default() {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        shop.clear_messages();

        let receipt = shop.complete_checkout();

        assert_eq!(receipt.total_quantity(), 1);
        assert!(shop.cart().is_empty());
        assert!(shop.messages().is_empty());
    }

    #[test]
    fn keep_cart_policy_leaves_cart_alone() {
        let config = ShopConfig {
            checkout: CheckoutPolicy::KeepCart,
            ..ShopConfig::default()
        };
        let mut shop = Shop::from_config(MemoryStore::new(), &config);
        shop.add(product(1, "Astronaut"));

        let receipt = shop.complete_checkout();

        assert_eq!(receipt.total_quantity(), 1);
        assert_eq!(shop.cart().total_quantity(), 1);
        assert_eq!(shop.checkout_policy(), CheckoutPolicy::KeepCart);
    }

    #[test]
    fn hide_message_removes_only_that_message() -> TestResult {
        let mut shop = Shop::new(MemoryStore::new());
        shop.add(product(1, "Astronaut"));
        let checkout = shop.checkout().ok_or("checkout refused")?;

        shop.hide_message(&checkout);

        assert_eq!(shop.messages().len(), 1);
        assert_eq!(
            shop.messages().first().map(|m| m.kind),
            Some(MessageKind::Success)
        );

        Ok(())
    }
}
