//! Application services for the todo list.
//!
//! [`TaskPersistence`] wraps the durable store, [`TaskListController`] owns
//! the in-memory list and reconciles it with the remote API and the store,
//! and [`dispatch`] maps UI events onto controller operations.

mod controller;
mod dispatch;
mod persistence;

pub use controller::{
    LoadReport, SyncOutcome, SyncStatus, TaskListController, TaskListError, TaskListResult,
};
pub use dispatch::{DispatchOutcome, UiEvent, dispatch};
pub use persistence::{LoadedTasks, SaveOutcome, TaskPersistence};
