//! Port contracts for the todo list.
//!
//! Ports define the collaborators the controller talks to: the remote task
//! API, the durable key-value store and the view that renders tasks and
//! notifications.

pub mod api;
pub mod store;
pub mod view;

pub use api::{TaskApi, TaskApiError, TaskApiResult};
pub use store::{KeyValueStore, StoreError, StoreResult};
pub use view::{Notification, RenderRequest, Severity, TaskView};

#[cfg(test)]
pub use api::MockTaskApi;
