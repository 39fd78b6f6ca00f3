//! Cart persistence across sessions

use shopfront::{
    cart::CartAction,
    products::{Product, ProductId},
    storage::{CartPersistence, DEFAULT_CART_KEY, KeyValueStore, MemoryStore},
    store::CartStore,
    tags::TagSet,
};
use testresult::TestResult;

fn product(id: u64, price: &str) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price: price.to_string(),
        tags: TagSet::from_strs(&["gift", "home"]),
        gradient: "linear-gradient(135deg, #ffe5d9, #ffcad4)".to_string(),
    }
}

#[test]
fn reload_restores_items_in_order() -> TestResult {
    let backend = MemoryStore::new();

    let saved = {
        let mut store = CartStore::init(CartPersistence::new(&backend));
        store.dispatch(CartAction::AddItem(product(3, "NT$1,200")));
        store.dispatch(CartAction::AddItem(product(1, "NT$300")));
        store.dispatch(CartAction::SetQuantity {
            id: ProductId(3),
            quantity: 2,
        });
        store.state().clone()
    };

    let reloaded = CartStore::init(CartPersistence::new(&backend));

    assert_eq!(reloaded.state(), &saved);
    assert_eq!(reloaded.state().total_price(), 2_700);

    let ids: Vec<ProductId> = reloaded.state().items().iter().map(|i| i.id()).collect();

    assert_eq!(ids, vec![ProductId(3), ProductId(1)]);
    assert!(backend.get(DEFAULT_CART_KEY)?.is_some());

    Ok(())
}

#[test]
fn snapshot_is_camel_case_json() -> TestResult {
    let backend = MemoryStore::new();
    let mut store = CartStore::init(CartPersistence::new(&backend));
    store.dispatch(CartAction::AddItem(product(1, "NT$100")));

    let raw = backend.get(DEFAULT_CART_KEY)?.unwrap_or_default();
    let json: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(json["totalQuantity"], 1);
    assert_eq!(json["totalPrice"], 100);
    assert_eq!(json["items"][0]["id"], 1);
    assert_eq!(json["items"][0]["quantity"], 1);
    assert_eq!(json["items"][0]["price"], "NT$100");

    Ok(())
}

#[test]
fn clear_then_reload_is_empty() -> TestResult {
    let backend = MemoryStore::new();

    {
        let mut store = CartStore::init(CartPersistence::new(&backend));
        store.dispatch(CartAction::AddItem(product(1, "NT$100")));
        store.dispatch(CartAction::ClearCart);
    }

    assert!(backend.get(DEFAULT_CART_KEY)?.is_none());
    assert!(CartPersistence::new(&backend).load().is_none());
    assert!(CartStore::init(CartPersistence::new(&backend)).state().is_empty());

    Ok(())
}

#[test]
fn corrupt_snapshot_starts_empty_and_is_overwritten() -> TestResult {
    let backend = MemoryStore::new();
    backend.insert_raw(DEFAULT_CART_KEY, "]]] definitely not json");

    let mut store = CartStore::init(CartPersistence::new(&backend));

    assert!(store.state().is_empty());

    store.dispatch(CartAction::AddItem(product(1, "NT$100")));

    assert_eq!(
        CartPersistence::new(&backend).try_load()?.map(|s| s.total_price()),
        Some(100)
    );

    Ok(())
}

#[test]
fn custom_keys_do_not_collide() {
    let backend = MemoryStore::new();

    let mut first = CartStore::init(CartPersistence::with_key(&backend, "cart_a"));
    let second = CartStore::init(CartPersistence::with_key(&backend, "cart_b"));
    first.dispatch(CartAction::AddItem(product(1, "NT$100")));

    assert!(second.state().is_empty());
    assert!(CartPersistence::with_key(&backend, "cart_b").load().is_none());
    assert!(CartPersistence::with_key(&backend, "cart_a").load().is_some());
}

#[test]
fn unavailable_storage_never_breaks_the_cart() {
    let backend = MemoryStore::new();
    backend.set_offline(true);

    let mut store = CartStore::init(CartPersistence::new(&backend));
    store.dispatch(CartAction::AddItem(product(1, "NT$100")));
    store.dispatch(CartAction::ClearCart);
    store.dispatch(CartAction::AddItem(product(2, "NT$50")));

    assert_eq!(store.state().total_price(), 50);
}
