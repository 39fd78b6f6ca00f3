//! Cart Store
//!
//! The explicitly constructed owner of the current [`CartState`]. Views get
//! a reference to it through whatever context the host app uses; there is
//! no process-wide instance.

use tracing::debug;

use crate::{
    cart::{CartAction, CartState, transition},
    storage::{CartPersistence, KeyValueStore},
};

/// Current cart state plus its persistence shadow.
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    persistence: CartPersistence<S>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate from `persistence`, or start empty if nothing usable is stored.
    pub fn init(persistence: CartPersistence<S>) -> Self {
        let state = persistence.load().unwrap_or_default();

        debug!(
            lines = state.len(),
            total_quantity = state.total_quantity(),
            "cart store initialised"
        );

        Self { state, persistence }
    }

    /// Apply `action`, swap in the new state, then persist it.
    ///
    /// The in-memory state is updated first; persistence failures are logged
    /// by [`CartPersistence`] and never undo the transition. Clearing removes
    /// the stored snapshot instead of writing an empty one.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let clears = matches!(action, CartAction::ClearCart);

        debug!(?action, "dispatching cart action");

        self.state = transition(&self.state, action);

        if clears {
            self.persistence.clear();
        } else {
            self.persistence.save(&self.state);
        }

        &self.state
    }

    /// Current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Persistence adapter backing this store.
    pub fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }
}
