use std::sync::Arc;

use leptos::prelude::*;
use shopfront::{
    catalog::{Catalog, Pager, filter_by_tags},
    products::Product,
    tags::TagSet,
};

use crate::state::{Page, ShopContext};

/// Products shown in the strip above the listing.
const FEATURED_COUNT: usize = 4;

/// "Showing x-y of n" for the pager's current page.
fn showing_text(pager: &Pager) -> String {
    pager.visible_range().map_or_else(
        || "No products match the selected tags".to_string(),
        |range| {
            format!(
                "Showing {}-{} of {}",
                range.start(),
                range.end(),
                pager.total_items()
            )
        },
    )
}

#[component]
fn TagChips(tags: Vec<String>, selected: RwSignal<TagSet>, on_change: Callback<()>) -> impl IntoView {
    view! {
        <div class="tag-chips" role="group" aria-label="Filter by tag">
            {tags
                .into_iter()
                .map(|tag| {
                    let tag_for_class = tag.clone();
                    let tag_for_click = tag.clone();

                    view! {
                        <button
                            type="button"
                            class="tag-chip"
                            class:tag-chip-active=move || {
                                selected.with(|tags| tags.contains(&tag_for_class))
                            }
                            on:click=move |_| {
                                selected.update(|tags| tags.toggle(&tag_for_click));
                                on_change.run(());
                            }
                        >
                            {tag}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product, shop: ShopContext) -> impl IntoView {
    let style = format!("background: {}", product.gradient);
    let label = format!("Add {} to cart", product.title);
    let tags = product.tags.iter().collect::<Vec<_>>().join(" · ");
    let title = product.title.clone();
    let description = product.description.clone();
    let price = product.price.clone();

    view! {
        <article class="product-card">
            <div class="product-card-art" style=style aria-hidden="true"></div>
            <h3 class="product-card-title">{title}</h3>
            <p class="product-card-description">{description}</p>
            <p class="product-card-tags">{tags}</p>
            <div class="product-card-footer">
                <span class="product-card-price">{price}</span>
                <button
                    type="button"
                    class="button"
                    aria-label=label
                    on:click=move |_| shop.add(product.clone())
                >
                    "Add to cart"
                </button>
            </div>
        </article>
    }
}

#[component]
fn FeaturedStrip(products: Vec<Product>, shop: ShopContext) -> impl IntoView {
    (!products.is_empty()).then(|| {
        view! {
            <section class="featured" aria-label="Featured products">
                <h3 class="featured-title">"Featured"</h3>
                <div class="product-grid featured-grid">
                    {products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product shop=shop /> })
                        .collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
pub fn CatalogPanel(catalog: Arc<Catalog>, page_size: usize, shop: ShopContext) -> impl IntoView {
    let selected = RwSignal::new(TagSet::new());

    let filtered = {
        let catalog = Arc::clone(&catalog);

        Memo::new(move |_| {
            selected.with(|selected| {
                filter_by_tags(catalog.products(), selected)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let pager = RwSignal::new({
        let mut pager = Pager::new(page_size);
        pager.observe(catalog.products());
        pager
    });

    let on_filter_change = Callback::new(move |()| {
        filtered.with_untracked(|items| {
            pager.update(|pager| {
                pager.observe(items);
            });
        });
    });

    let cart_count = move || shop.cart.with(|cart| cart.total_quantity());

    view! {
        <section class="panel catalog">
            <div class="panel-header">
                <h2 class="panel-title">"Products"</h2>
                <button type="button" class="button-link" on:click=move |_| shop.show(Page::Cart)>
                    "Cart (" {cart_count} ")"
                </button>
            </div>
            <FeaturedStrip products=catalog.featured(FEATURED_COUNT).to_vec() shop=shop />
            <TagChips tags=catalog.tags() selected=selected on_change=on_filter_change />
            <p class="catalog-showing">{move || pager.with(showing_text)}</p>
            <div class="product-grid">
                {move || {
                    filtered.with(|items| {
                        pager.with(|pager| {
                            pager
                                .page_of(items)
                                .iter()
                                .cloned()
                                .map(|product| view! { <ProductCard product=product shop=shop /> })
                                .collect_view()
                        })
                    })
                }}
            </div>
            <nav class="pagination" aria-label="Pagination">
                <button
                    type="button"
                    class="button button-secondary"
                    disabled=move || !pager.with(Pager::has_prev)
                    on:click=move |_| {
                        pager.update(|pager| {
                            pager.prev_page();
                        });
                    }
                >
                    "Previous"
                </button>
                <span class="pagination-status">
                    {move || {
                        pager
                            .with(|pager| {
                                format!("Page {} of {}", pager.current_page(), pager.total_pages().max(1))
                            })
                    }}
                </span>
                <button
                    type="button"
                    class="button button-secondary"
                    disabled=move || !pager.with(Pager::has_next)
                    on:click=move |_| {
                        pager.update(|pager| {
                            pager.next_page();
                        });
                    }
                >
                    "Next"
                </button>
            </nav>
        </section>
    }
}
