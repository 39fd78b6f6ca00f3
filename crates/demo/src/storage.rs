//! Browser storage backends.

use shopfront::storage::{KeyValueStore, MemoryStore, StorageError};
use tracing::warn;

/// `window.localStorage` behind [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser refuses access, e.g. in some private browsing modes.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|error| StorageError::Unavailable(describe(&error)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;

        Ok(Self { storage })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BrowserStorage {
    /// Browser storage only exists on the web.
    ///
    /// # Errors
    ///
    /// Always returns [`StorageError::Unavailable`].
    pub fn open() -> Result<Self, StorageError> {
        Err(StorageError::Unavailable(
            "localStorage requires a browser".to_string(),
        ))
    }
}

#[cfg(target_arch = "wasm32")]
fn describe(error: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(exception) = error.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }

    error.dyn_ref::<js_sys::Error>().map_or_else(
        || format!("{error:?}"),
        |error| String::from(error.message()),
    )
}

#[cfg(target_arch = "wasm32")]
fn is_quota_error(error: &wasm_bindgen::JsValue) -> bool {
    use wasm_bindgen::JsCast;

    error
        .dyn_ref::<web_sys::DomException>()
        .is_some_and(|exception| exception.name() == "QuotaExceededError")
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|error| StorageError::Backend(describe(&error)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|error| {
            if is_quota_error(&error) {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                }
            } else {
                StorageError::Backend(describe(&error))
            }
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|error| StorageError::Backend(describe(&error)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("no browser".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no browser".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no browser".to_string()))
    }
}

/// Whichever store the app ended up with.
#[derive(Debug)]
pub enum Backend {
    /// The browser's local storage.
    Browser(BrowserStorage),

    /// Session-only fallback when local storage is unavailable.
    Memory(MemoryStore),
}

impl Backend {
    /// Prefer local storage, falling back to memory so the cart still works.
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => Self::Browser(storage),
            Err(error) => {
                warn!("cart will not persist across reloads: {error}");

                Self::Memory(MemoryStore::new())
            }
        }
    }

    /// Check whether the cart survives a reload.
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Browser(_))
    }
}

impl KeyValueStore for Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Browser(storage) => storage.get(key),
            Self::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Browser(storage) => storage.set(key, value),
            Self::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Browser(storage) => storage.remove(key),
            Self::Memory(storage) => storage.remove(key),
        }
    }
}
