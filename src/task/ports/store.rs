//! Durable key-value store port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for durable store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// String-keyed durable store, such as browser local storage.
///
/// A missing key is a valid state and is reported as `Ok(None)`, distinct
/// from the store itself being unavailable.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Errors returned by durable store adapters.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store is not usable at all.
    #[error("durable store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected an individual read or write.
    #[error("durable store I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps an I/O error from a store adapter.
    #[must_use]
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
