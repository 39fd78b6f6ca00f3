//! Shopfront browser demo

use std::sync::Arc;

use leptos::prelude::*;
use shopfront::{catalog::Catalog, config::ShopConfig, shop::Shop};
use tracing::{info, warn};

mod cart;
mod logging;
mod money;
mod products;
mod receipt;
mod state;
mod storage;
mod toasts;

use state::{Page, ShopContext};
use storage::Backend;

const CATALOG_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/catalog.yml");
const CONFIG_FIXTURE_YAML: &str = include_str!("../../../fixtures/config/shop.yml");

/// Parsed fixtures used by the UI.
#[derive(Debug)]
struct AppData {
    /// Products offered for sale.
    catalog: Arc<Catalog>,

    /// Shop settings.
    config: ShopConfig,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let config = ShopConfig::from_yaml(CONFIG_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load shop config: {error}"))?;

        let catalog = Catalog::from_yaml(CATALOG_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load catalog: {error}"))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }
}

/// Main demo app shell.
#[component]
fn App(data: Result<AppData, String>) -> impl IntoView {
    match data {
        Ok(app_data) => {
            let backend = Backend::open();

            info!(
                products = app_data.catalog.len(),
                persistent = backend.is_persistent(),
                "starting shop"
            );

            let shop = ShopContext::new(Shop::from_config(backend, &app_data.config));
            let catalog = app_data.catalog;
            let page_size = app_data.config.page_size;

            view! {
                <main class="shell">
                    <div class="shell-header">
                        <h1 class="shell-title">"Shopfront"</h1>
                    </div>
                    {move || match shop.page.get() {
                        Page::Catalog => view! {
                            <products::CatalogPanel
                                catalog=Arc::clone(&catalog)
                                page_size=page_size
                                shop=shop
                            />
                        }
                            .into_any(),
                        Page::Cart => view! { <cart::CartPanel shop=shop /> }.into_any(),
                        Page::Receipt => view! { <receipt::ReceiptView shop=shop /> }.into_any(),
                    }}
                    <toasts::ToastStack shop=shop />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="shell">
                <div class="shell-header">
                    <h1 class="shell-title">"Shopfront"</h1>
                </div>
                <div class="error-panel">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let data = AppData::load();

    let logging = data
        .as_ref()
        .map(|data| data.config.logging.clone())
        .unwrap_or_default();

    if let Err(error) = logging::init(&logging) {
        warn!("logging already initialised: {error}");
    }

    leptos::mount::mount_to_body(move || view! { <App data=data /> });
}
