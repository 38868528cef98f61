//! In-memory durable store.

use crate::task::ports::{KeyValueStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory key-value store.
///
/// Can be marked unavailable, after which every operation fails like a
/// browser with storage disabled.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl InMemoryKeyValueStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects every operation.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    /// Seeds a raw value under `key`.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.entries.insert(key.into(), value.into());
        }
        self
    }

    /// Switches the store between available and unavailable.
    pub fn set_available(&self, available: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = !available;
        }
    }

    /// Returns the raw value under `key`, bypassing availability.
    #[must_use]
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.entries.get(key).cloned())
    }

    /// Returns the number of stored keys, bypassing availability.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map_or(0, |state| state.entries.len())
    }

    /// Returns `true` when no key is stored, bypassing availability.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const UNAVAILABLE: &str = "storage disabled";

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| StoreError::io(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(StoreError::Unavailable(UNAVAILABLE.to_owned()));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StoreError::io(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(StoreError::Unavailable(UNAVAILABLE.to_owned()));
        }
        state.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StoreError::io(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(StoreError::Unavailable(UNAVAILABLE.to_owned()));
        }
        state.entries.remove(key);
        Ok(())
    }
}
