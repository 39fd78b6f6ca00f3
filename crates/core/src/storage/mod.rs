//! Storage
//!
//! A minimal string key-value interface over whatever the host offers
//! (browser `localStorage`, an in-memory map in tests), and the cart
//! snapshot adapter built on top of it.

use thiserror::Error;

mod memory;
mod persistence;

pub use memory::MemoryStore;
pub use persistence::{CartPersistence, DEFAULT_CART_KEY, SnapshotError};

/// Errors raised by a key-value backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached at all (disabled, private mode, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write was refused because it would exceed the backend's quota.
    #[error("storage quota exceeded writing {bytes} bytes to {key}")]
    QuotaExceeded {
        /// Key being written
        key: String,

        /// Size of the rejected value
        bytes: usize,
    },

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value storage.
///
/// Methods take `&self`: browser storage is a shared handle, and in-process
/// implementations use interior mutability.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write is refused.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
