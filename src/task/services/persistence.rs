//! Durable persistence of the task list.

use crate::task::{
    domain::TaskList,
    ports::{KeyValueStore, StoreError, StoreResult},
};
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const PROBE_KEY: &str = "__todolist_storage_probe__";
const PROBE_VALUE: &str = "probe";

/// Result of reading the task list from the durable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedTasks {
    /// The store could not be probed, read or parsed.
    Unavailable,
    /// The stored list; empty when the store holds no record yet.
    Tasks(TaskList),
}

/// Result of writing the task list to the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The list was written.
    Saved,
    /// The store was unusable and the warning has already been issued.
    Skipped,
    /// The store was unusable for the first time; the caller should show the
    /// storage warning.
    SkippedWithWarning,
}

/// Serializes the task list under one fixed key of a durable store.
///
/// No method returns an error: store failures degrade to [`LoadedTasks::Unavailable`]
/// on read and to a skipped save on write. The storage warning is requested
/// at most once over the lifetime of a `TaskPersistence`.
#[derive(Debug)]
pub struct TaskPersistence<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    key: String,
    warned: AtomicBool,
}

impl<S> TaskPersistence<S>
where
    S: KeyValueStore,
{
    /// Key used when none is configured.
    pub const DEFAULT_KEY: &'static str = "todo-app-tasks";

    /// Creates a persistence adapter writing under `key`.
    #[must_use]
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            warned: AtomicBool::new(false),
        }
    }

    /// Creates a persistence adapter writing under [`Self::DEFAULT_KEY`].
    #[must_use]
    pub fn with_default_key(store: Arc<S>) -> Self {
        Self::new(store, Self::DEFAULT_KEY)
    }

    /// Returns the key the list is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Probes the store with a write followed by a remove.
    ///
    /// The probe uses its own key, so the stored list is never touched.
    #[must_use]
    pub fn is_available(&self) -> bool {
        let probe = self
            .store
            .set(PROBE_KEY, PROBE_VALUE)
            .and_then(|()| self.store.remove(PROBE_KEY));
        if let Err(err) = probe {
            debug!("durable store probe failed: {err}");
            return false;
        }
        true
    }

    /// Writes the full task list.
    #[must_use]
    pub fn save(&self, tasks: &TaskList) -> SaveOutcome {
        match self.write(tasks) {
            Ok(()) => {
                debug!("persisted {} task(s) under '{}'", tasks.len(), self.key);
                SaveOutcome::Saved
            }
            Err(err) => {
                warn!("task list not persisted: {err}");
                if self.warned.swap(true, Ordering::Relaxed) {
                    SaveOutcome::Skipped
                } else {
                    SaveOutcome::SkippedWithWarning
                }
            }
        }
    }

    /// Reads the task list.
    ///
    /// Distinguishes a reachable store without a record (an empty list) from
    /// an unusable store or a corrupt record ([`LoadedTasks::Unavailable`]).
    #[must_use]
    pub fn load(&self) -> LoadedTasks {
        if !self.is_available() {
            return LoadedTasks::Unavailable;
        }
        match self.read() {
            Ok(tasks) => LoadedTasks::Tasks(tasks),
            Err(err) => {
                warn!("stored task list could not be restored: {err}");
                LoadedTasks::Unavailable
            }
        }
    }

    fn write(&self, tasks: &TaskList) -> StoreResult<()> {
        if !self.is_available() {
            return Err(StoreError::Unavailable("probe failed".to_owned()));
        }
        let payload = serde_json::to_string(tasks).map_err(StoreError::io)?;
        self.store.set(&self.key, &payload)
    }

    fn read(&self) -> StoreResult<TaskList> {
        let Some(payload) = self.store.get(&self.key)? else {
            return Ok(TaskList::new());
        };
        serde_json::from_str(&payload).map_err(StoreError::io)
    }
}
