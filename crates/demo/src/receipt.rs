use leptos::prelude::*;

use crate::{
    money::format_total,
    state::{Page, ShopContext},
};

#[component]
pub fn ReceiptView(shop: ShopContext) -> impl IntoView {
    view! {
        <section class="panel receipt">
            <h2 class="panel-title">"Thank you for your order"</h2>
            {move || match shop.receipt.get() {
                Some(receipt) if !receipt.is_empty() => view! {
                    <p class="receipt-summary">"You bought: " {receipt.summary(", ")}</p>
                    <p class="receipt-row">
                        <span>"Items"</span>
                        <span>{receipt.total_quantity()}</span>
                    </p>
                    <p class="receipt-total">
                        <span>"Total paid"</span>
                        <span>{format_total(receipt.total_price())}</span>
                    </p>
                }
                    .into_any(),
                _ => view! { <p class="receipt-empty">"Nothing was purchased."</p> }.into_any(),
            }}
            <button type="button" class="button" on:click=move |_| shop.show(Page::Catalog)>
                "Continue shopping"
            </button>
        </section>
    }
}
