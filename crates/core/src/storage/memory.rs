//! In-memory key-value store.

use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// A `RefCell`-backed map implementing [`KeyValueStore`].
///
/// Can be given a byte quota or switched offline to exercise the failure
/// paths that real browser storage hits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<FxHashMap<String, String>>,
    quota: Option<usize>,
    offline: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty, unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that refuses values longer than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with [`StorageError::Unavailable`], or restore it.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Read a raw entry, bypassing the offline switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Write a raw entry, bypassing quota and the offline switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.offline.get() {
            Err(StorageError::Unavailable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_online()?;

        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_online()?;

        if self.quota.is_some_and(|quota| value.len() > quota) {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                bytes: value.len(),
            });
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_online()?;

        self.entries.borrow_mut().remove(key);

        Ok(())
    }
}
