//! Cart snapshot persistence.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{CartItem, CartState},
    products::ProductId,
};

use super::{KeyValueStore, StorageError};

/// Storage key used when none is configured.
pub const DEFAULT_CART_KEY: &str = "shopping_cart";

/// Reasons a stored snapshot could not be turned back into a cart.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The backend failed to read.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored value is not a cart snapshot.
    #[error("snapshot is not valid cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A line has a quantity of zero.
    #[error("snapshot line {0} has zero quantity")]
    ZeroQuantity(ProductId),

    /// Two lines share a product id.
    #[error("snapshot has duplicate lines for product {0}")]
    DuplicateProduct(ProductId),
}

/// On-disk shape. Stored totals are accepted but ignored.
#[derive(Debug, Deserialize)]
struct CartSnapshot {
    items: Vec<CartItem>,
}

/// Reads and writes the cart snapshot under a single key.
///
/// Every failure is logged and swallowed: a broken store degrades to an
/// empty or unsaved cart and never reaches the caller.
#[derive(Debug)]
pub struct CartPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Persist under [`DEFAULT_CART_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key of the snapshot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the snapshot, rebuilding totals from its lines.
    ///
    /// Returns `None` when the entry is missing, unreadable or invalid.
    #[tracing::instrument(name = "cart.persistence.load", skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Option<CartState> {
        match self.try_load() {
            Ok(state) => state,
            Err(error) => {
                warn!("discarding stored cart: {error}");

                None
            }
        }
    }

    /// Read the snapshot, reporting why it could not be used.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if the backend fails, the value is not a
    /// cart snapshot, or its lines break the cart invariants.
    pub fn try_load(&self) -> Result<Option<CartState>, SnapshotError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let snapshot: CartSnapshot = serde_json::from_str(&raw)?;
        let mut seen = FxHashSet::default();

        for item in &snapshot.items {
            if item.quantity() == 0 {
                return Err(SnapshotError::ZeroQuantity(item.id()));
            }

            if !seen.insert(item.id()) {
                return Err(SnapshotError::DuplicateProduct(item.id()));
            }
        }

        debug!(lines = snapshot.items.len(), "rehydrated cart snapshot");

        Ok(Some(CartState::from_items(snapshot.items)))
    }

    /// Overwrite the snapshot with `state`.
    pub fn save(&self, state: &CartState) {
        let serialized = match serde_json::to_string(state) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(key = %self.key, "failed to serialize cart: {error}");

                return;
            }
        };

        if let Err(error) = self.store.set(&self.key, &serialized) {
            warn!(key = %self.key, "failed to save cart: {error}");
        }
    }

    /// Delete the snapshot entirely.
    pub fn clear(&self) {
        if let Err(error) = self.store.remove(&self.key) {
            warn!(key = %self.key, "failed to clear stored cart: {error}");
        }
    }
}
