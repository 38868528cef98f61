//! View port: the sink for render and notification requests.

use crate::task::domain::{Task, TaskList};

/// Redraws the task list and shows transient notifications.
///
/// Implementations treat notifications as single-slot: a new notification
/// replaces the one currently shown.
pub trait TaskView: Send + Sync {
    /// Redraws the list view or the empty-state placeholder.
    fn render(&self, request: RenderRequest);

    /// Shows a notification, replacing any current one.
    fn notify(&self, notification: Notification);
}

/// Request to redraw the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    /// Draw the given tasks in order.
    Tasks(Vec<Task>),
    /// Draw the empty-state placeholder.
    Empty,
}

impl RenderRequest {
    /// Builds the request for the current list, choosing the empty state
    /// when there are no tasks.
    #[must_use]
    pub fn for_tasks(tasks: &TaskList) -> Self {
        if tasks.is_empty() {
            Self::Empty
        } else {
            Self::Tasks(tasks.as_slice().to_vec())
        }
    }
}

/// How prominently a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The operation was rejected.
    Error,
    /// The operation succeeded locally but was not synchronized.
    Degraded,
    /// The durable store is unusable; shown once per process.
    StorageWarning,
}

impl Severity {
    /// Returns the canonical lowercase name, used as a CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Degraded => "degraded",
            Self::StorageWarning => "storage-warning",
        }
    }
}

/// Human-readable notification with a severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message: String,
}

impl Notification {
    /// Message shown when a description fails validation.
    pub const INVALID_DESCRIPTION: &'static str = "Please enter a task description";
    /// Message shown when an operation names an unknown task.
    pub const TASK_NOT_FOUND: &'static str = "Task not found";
    /// Message shown when an operation fell back to local-only mode.
    pub const DEGRADED: &'static str =
        "Saved locally only; changes may not be synced with the server";
    /// Message shown once when the durable store is unusable.
    pub const STORAGE_UNAVAILABLE: &'static str =
        "Local storage is unavailable; tasks will not be kept after this session";

    /// Creates a notification.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates the degraded-mode notification.
    #[must_use]
    pub fn degraded() -> Self {
        Self::new(Severity::Degraded, Self::DEGRADED)
    }

    /// Creates the one-time storage warning.
    #[must_use]
    pub fn storage_warning() -> Self {
        Self::new(Severity::StorageWarning, Self::STORAGE_UNAVAILABLE)
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
