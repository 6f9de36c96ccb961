//! Fail-soft JSON persistence over a string key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! State containers (session, cart) mirror themselves into browser
//! `localStorage` after every mutation. They talk to storage only through the
//! `KeyValueStore` port so native tests and SSR can swap in `MemoryStore`.
//!
//! ERROR HANDLING
//! ==============
//! The raw port reports `StorageError`. The typed helpers (`load_json`,
//! `save_json`, `remove_key`) swallow those errors after logging a warning:
//! a broken or full storage area degrades to "nothing persisted", never to a
//! failed UI action. Nothing is retried.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure modes of the underlying storage area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value for key {key}: {reason}")]
    Serialize { key: String, reason: String },
}

/// String key-value storage port.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the storage area cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area is unreachable or rejects the write
    /// (for example when the quota is exhausted).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the storage area cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`.
///
/// Outside the `hydrate` feature there is no browser, so every call reports
/// `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: e.as_string().unwrap_or_else(|| "storage rejected write".to_owned()),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.remove_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set_item` calls fail, as a full browser quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// Returns `None` when the key is absent, storage is unreachable, or the stored
/// text does not decode as `T`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_item(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("storage read for {key} failed: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed stored value for {key}: {e}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// Serialization happens before the write, so a failure at either step leaves
/// the previously stored value in place. Returns whether the write landed.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize { key: key.to_owned(), reason: e.to_string() })
        .and_then(|raw| store.set_item(key, &raw));
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("storage write skipped: {e}");
            false
        }
    }
}

/// Remove `key`, logging instead of failing when storage is unreachable.
pub fn remove_key(store: &impl KeyValueStore, key: &str) {
    if let Err(e) = store.remove_item(key) {
        log::warn!("storage remove for {key} failed: {e}");
    }
}
