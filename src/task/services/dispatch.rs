//! Dispatch table from UI events to controller operations.

use super::{LoadReport, SyncOutcome, TaskListController, TaskListResult};
use crate::task::{
    domain::{Task, TaskId},
    ports::{KeyValueStore, TaskApi, TaskView},
};
use mockable::Clock;

/// A user-interface event the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The page finished loading.
    Startup,
    /// The new-task form was submitted.
    Submit {
        /// Raw text from the description field.
        description: String,
    },
    /// A task's checkbox was clicked.
    Toggle {
        /// Task the checkbox belongs to.
        id: TaskId,
    },
    /// A task's delete button was clicked.
    Delete {
        /// Task the button belongs to.
        id: TaskId,
    },
}

/// Result of dispatching a [`UiEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The list was restored from the durable store.
    Loaded(LoadReport),
    /// A task was created.
    Created(SyncOutcome<Task>),
    /// A task's completion flag was flipped.
    Toggled(SyncOutcome<Task>),
    /// A task was removed.
    Deleted(SyncOutcome<Task>),
}

/// Routes a UI event to the matching controller operation.
///
/// # Errors
///
/// Propagates the [`TaskListError`](super::TaskListError) of the operation;
/// the controller has already notified the view.
pub async fn dispatch<A, S, V, C>(
    controller: &mut TaskListController<A, S, V, C>,
    event: &UiEvent,
) -> TaskListResult<DispatchOutcome>
where
    A: TaskApi,
    S: KeyValueStore,
    V: TaskView,
    C: Clock + Send + Sync,
{
    match event {
        UiEvent::Startup => Ok(DispatchOutcome::Loaded(controller.load())),
        UiEvent::Submit { description } => controller
            .create(description)
            .await
            .map(DispatchOutcome::Created),
        UiEvent::Toggle { id } => controller.toggle(id).await.map(DispatchOutcome::Toggled),
        UiEvent::Delete { id } => controller.delete(id).await.map(DispatchOutcome::Deleted),
    }
}
