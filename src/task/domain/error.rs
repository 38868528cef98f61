//! Error types for task domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty or whitespace-only")]
    EmptyDescription,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// A task with the same identifier is already in the list.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}
