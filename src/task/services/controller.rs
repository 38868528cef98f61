//! Task list controller: the synchronization state machine.
//!
//! Every operation tries the remote API first. Remote and transport failures
//! fall back to local-only semantics, so a failing server never blocks the
//! user; validation failures and unknown ids are rejected before any side
//! effect. After any successful path the list is persisted, the view is
//! redrawn and, for local-only results, a degraded-mode notification is
//! shown.

use crate::task::{
    domain::{FallbackIdScheme, Task, TaskDescription, TaskDomainError, TaskId, TaskList},
    ports::{KeyValueStore, Notification, RenderRequest, TaskApi, TaskApiResult, TaskView},
    services::{LoadedTasks, SaveOutcome, TaskPersistence},
};
use log::{debug, info, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors that reject a controller operation without changing state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListError {
    /// The input failed domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for controller operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Whether a change reached the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// The remote API accepted the change.
    Synced,
    /// The change was applied locally only.
    LocalOnly,
}

/// Successful operation result paired with its synchronization status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome<T> {
    value: T,
    sync: SyncStatus,
}

impl<T> SyncOutcome<T> {
    const fn new(value: T, sync: SyncStatus) -> Self {
        Self { value, sync }
    }

    /// Returns the operation's value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome and returns the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the synchronization status.
    #[must_use]
    pub const fn sync(&self) -> SyncStatus {
        self.sync
    }

    /// Returns `true` when the operation only succeeded locally.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self.sync, SyncStatus::LocalOnly)
    }
}

/// Summary of the startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of tasks restored from the durable store.
    pub restored: usize,
    /// Whether the durable store could be read.
    pub store_available: bool,
    /// Counter value the next fallback id will use.
    pub next_fallback: u64,
}

/// Owns the in-memory task list and keeps it in step with the remote API
/// and the durable store.
///
/// Operations take `&mut self`, so each one runs to completion, including
/// its persistence and view side effects, before the next can start.
pub struct TaskListController<A, S, V, C>
where
    A: TaskApi,
    S: KeyValueStore,
    V: TaskView,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    persistence: TaskPersistence<S>,
    view: Arc<V>,
    clock: Arc<C>,
    ids: FallbackIdScheme,
    tasks: TaskList,
    next_fallback: u64,
}

impl<A, S, V, C> TaskListController<A, S, V, C>
where
    A: TaskApi,
    S: KeyValueStore,
    V: TaskView,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty list and the default fallback id
    /// scheme.
    #[must_use]
    pub fn new(api: Arc<A>, persistence: TaskPersistence<S>, view: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            api,
            persistence,
            view,
            clock,
            ids: FallbackIdScheme::default(),
            tasks: TaskList::new(),
            next_fallback: FallbackIdScheme::BASE_COUNTER,
        }
    }

    /// Replaces the fallback id scheme.
    #[must_use]
    pub fn with_fallback_scheme(mut self, ids: FallbackIdScheme) -> Self {
        self.next_fallback = ids.next_counter(self.tasks.ids());
        self.ids = ids;
        self
    }

    /// Returns the current task list.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// Restores the task list from the durable store and redraws the view.
    ///
    /// An unavailable store or missing record leaves the list empty. The
    /// fallback counter is moved past the highest restored fallback id so new
    /// fallback ids never collide with restored ones.
    pub fn load(&mut self) -> LoadReport {
        let (tasks, store_available) = match self.persistence.load() {
            LoadedTasks::Tasks(tasks) => (tasks, true),
            LoadedTasks::Unavailable => (TaskList::new(), false),
        };
        self.tasks = tasks;
        self.next_fallback = self.ids.next_counter(self.tasks.ids());
        info!(
            "loaded {} task(s); next fallback id {}",
            self.tasks.len(),
            self.ids.mint(self.next_fallback)
        );
        self.view.render(RenderRequest::for_tasks(&self.tasks));
        LoadReport {
            restored: self.tasks.len(),
            store_available,
            next_fallback: self.next_fallback,
        }
    }

    /// Creates a task from raw user input.
    ///
    /// The remote copy is appended when the API accepts the task; otherwise
    /// a local task with a fallback id is appended and the outcome is
    /// [`SyncStatus::LocalOnly`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Validation`] when the description is empty
    /// or whitespace-only. The list is left unchanged.
    pub async fn create(&mut self, raw_description: &str) -> TaskListResult<SyncOutcome<Task>> {
        let description =
            TaskDescription::new(raw_description).map_err(|err| self.rejected(err.into()))?;

        let remote_result = self.api.create(&description).await;
        let (task, sync) = match remote_result {
            Ok(remote) if !self.tasks.contains(remote.id()) => {
                debug!("remote create accepted task {}", remote.id());
                (remote, SyncStatus::Synced)
            }
            Ok(remote) => {
                warn!(
                    "remote create returned id {} already in the list; keeping a local copy",
                    remote.id()
                );
                (self.fallback_task(description), SyncStatus::LocalOnly)
            }
            Err(err) => {
                warn!("remote create failed, keeping a local copy: {err}");
                (self.fallback_task(description), SyncStatus::LocalOnly)
            }
        };

        self.tasks
            .push(task.clone())
            .map_err(|err| self.rejected(err.into()))?;
        self.commit(sync);
        Ok(SyncOutcome::new(task, sync))
    }

    /// Flips the completion flag of a task.
    ///
    /// The local flag is flipped whether or not the API accepts the update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::NotFound`] when no task has the id. The list
    /// is left unchanged.
    pub async fn toggle(&mut self, id: &TaskId) -> TaskListResult<SyncOutcome<Task>> {
        let Some(current) = self.tasks.get(id) else {
            return Err(self.rejected(TaskListError::NotFound(id.clone())));
        };
        let completed = !current.is_completed();

        let sync = sync_status("update", id, self.api.update_completion(id, completed).await);

        let Some(task) = self.tasks.get_mut(id) else {
            return Err(self.rejected(TaskListError::NotFound(id.clone())));
        };
        task.set_completed(completed);
        let updated = task.clone();
        self.commit(sync);
        Ok(SyncOutcome::new(updated, sync))
    }

    /// Removes a task.
    ///
    /// The task is removed locally whether or not the API accepts the
    /// deletion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::NotFound`] when no task has the id. The list
    /// is left unchanged.
    pub async fn delete(&mut self, id: &TaskId) -> TaskListResult<SyncOutcome<Task>> {
        if !self.tasks.contains(id) {
            return Err(self.rejected(TaskListError::NotFound(id.clone())));
        }

        let sync = sync_status("delete", id, self.api.delete(id).await);

        let Some(removed) = self.tasks.remove(id) else {
            return Err(self.rejected(TaskListError::NotFound(id.clone())));
        };
        self.commit(sync);
        Ok(SyncOutcome::new(removed, sync))
    }

    fn fallback_task(&mut self, description: TaskDescription) -> Task {
        let id = loop {
            let candidate = self.ids.mint(self.next_fallback);
            self.next_fallback = self.next_fallback.saturating_add(1);
            if !self.tasks.contains(&candidate) {
                break candidate;
            }
        };
        Task::new(id, description, &*self.clock)
    }

    /// Persists, redraws and reports the outcome of a successful operation.
    fn commit(&self, sync: SyncStatus) {
        let saved = self.persistence.save(&self.tasks);
        self.view.render(RenderRequest::for_tasks(&self.tasks));
        if sync == SyncStatus::LocalOnly {
            self.view.notify(Notification::degraded());
        }
        if saved == SaveOutcome::SkippedWithWarning {
            self.view.notify(Notification::storage_warning());
        }
    }

    fn rejected(&self, error: TaskListError) -> TaskListError {
        debug!("operation rejected: {error}");
        let message = match &error {
            TaskListError::Validation(_) => Notification::INVALID_DESCRIPTION,
            TaskListError::NotFound(_) => Notification::TASK_NOT_FOUND,
        };
        self.view.notify(Notification::error(message));
        error
    }
}

fn sync_status(operation: &str, id: &TaskId, result: TaskApiResult<()>) -> SyncStatus {
    match result {
        Ok(()) => {
            debug!("remote {operation} accepted for task {id}");
            SyncStatus::Synced
        }
        Err(err) => {
            warn!("remote {operation} failed for task {id}, applying locally: {err}");
            SyncStatus::LocalOnly
        }
    }
}
