use leptos::prelude::*;
use shopfront::cart::CartItem;

use crate::{
    money::format_total,
    state::{Page, ShopContext},
};

/// Parse a quantity field. Anything unparsable leaves the line unchanged.
fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn checkout_label(checking_out: bool) -> &'static str {
    if checking_out { "Processing..." } else { "Checkout" }
}

#[component]
fn CartLine(item: CartItem, shop: ShopContext) -> impl IntoView {
    let id = item.id();
    let title = item.title().to_string();
    let remove_label = format!("Remove {title} from cart");

    view! {
        <li class="cart-line">
            <span class="cart-line-title">{title}</span>
            <span class="cart-line-price">{item.product().price.clone()}</span>
            <input
                type="number"
                class="cart-line-quantity"
                min="0"
                prop:value=item.quantity().to_string()
                on:change=move |event| {
                    if let Some(quantity) = parse_quantity(&event_target_value(&event)) {
                        shop.set_quantity(id, quantity);
                    }
                }
            />
            <span class="cart-line-total">{format_total(item.line_total())}</span>
            <button
                type="button"
                class="icon-button icon-button-secondary"
                aria-label=remove_label
                on:click=move |_| shop.remove(id)
            >
                "×"
            </button>
        </li>
    }
}

#[component]
pub fn CartPanel(shop: ShopContext) -> impl IntoView {
    let is_empty = move || shop.cart.with(|cart| cart.is_empty());
    let is_locked = move || is_empty() || shop.checking_out.get();

    view! {
        <section class="panel cart">
            <div class="panel-header">
                <h2 class="panel-title">"Your cart"</h2>
                <button type="button" class="button-link" on:click=move |_| shop.show(Page::Catalog)>
                    "Back to products"
                </button>
            </div>
            {move || {
                if is_empty() {
                    view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
                } else {
                    view! {
                        <ul class="cart-lines">
                            {shop
                                .cart
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|item| view! { <CartLine item=item shop=shop /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            <div class="cart-summary">
                <p class="cart-summary-row">
                    <span>"Items"</span>
                    <span>{move || shop.cart.with(|cart| cart.total_quantity())}</span>
                </p>
                <p class="cart-total-row">
                    <span>"Total"</span>
                    <span>{move || format_total(shop.cart.with(|cart| cart.total_price()))}</span>
                </p>
            </div>
            <div class="cart-actions">
                <button
                    type="button"
                    class="button button-secondary"
                    disabled=is_locked
                    on:click=move |_| shop.clear()
                >
                    "Clear cart"
                </button>
                <button
                    type="button"
                    class="button"
                    disabled=is_locked
                    on:click=move |_| shop.checkout()
                >
                    {move || checkout_label(shop.checking_out.get())}
                </button>
            </div>
        </section>
    }
}
