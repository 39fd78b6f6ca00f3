//! Tag filtering

use crate::{products::Product, tags::TagSet};

/// Sorted, de-duplicated union of the tags of `products`.
pub fn distinct_tags<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    products
        .into_iter()
        .fold(TagSet::new(), |mut tags, product| {
            tags |= product.tags.clone();
            tags
        })
        .into()
}

/// Products carrying at least one of the `selected` tags, in their original
/// order. An empty selection keeps every product.
pub fn filter_by_tags<'a>(products: &'a [Product], selected: &TagSet) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selected.is_empty() || product.tags.intersects(selected))
        .collect()
}
