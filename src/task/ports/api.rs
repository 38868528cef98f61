//! Remote API port for task synchronization.

use crate::task::domain::{Task, TaskDescription, TaskId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for remote task API calls.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Remote task API contract.
///
/// Mirrors the REST surface `POST /api/tasks`, `PUT /api/tasks/{id}` and
/// `DELETE /api/tasks/{id}`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Creates a task remotely and returns the server's authoritative copy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Remote`] on a non-success status,
    /// [`TaskApiError::Transport`] when the server is unreachable and
    /// [`TaskApiError::InvalidResponse`] when the reply cannot be decoded.
    async fn create(&self, description: &TaskDescription) -> TaskApiResult<Task>;

    /// Sets the completion flag of a task remotely.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Remote`] on a non-success status (including
    /// `404` for unknown ids) or [`TaskApiError::Transport`] when the server
    /// is unreachable.
    async fn update_completion(&self, id: &TaskId, completed: bool) -> TaskApiResult<()>;

    /// Deletes a task remotely.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Remote`] on a non-success status (including
    /// `404` for unknown ids) or [`TaskApiError::Transport`] when the server
    /// is unreachable.
    async fn delete(&self, id: &TaskId) -> TaskApiResult<()>;
}

/// Errors returned by remote task API adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskApiError {
    /// The API was reached but answered with a failure status.
    #[error("task API returned status {status}: {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The API could not be reached.
    #[error("task API unreachable: {0}")]
    Transport(String),

    /// The API answered with a success status but an unusable body.
    #[error("task API response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl TaskApiError {
    /// Returns `true` when the failure happened before reaching the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
