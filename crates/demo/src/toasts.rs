use leptos::prelude::*;

use crate::state::ShopContext;

#[component]
pub fn ToastStack(shop: ShopContext) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                shop.messages
                    .get()
                    .into_iter()
                    .map(|message| {
                        let class = format!("toast toast-{}", message.kind.as_str());
                        let id = message.id.clone();

                        view! {
                            <div class=class>
                                <span class="toast-content">{message.content}</span>
                                <button
                                    type="button"
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| shop.hide_message(&id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
