//! Task entity.

use super::{TaskDescription, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// This is the one schema shared by the remote API payloads and the durable
/// store record: `{id, description, completed, created_at}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    #[serde(default)]
    completed: bool,
    #[serde(with = "super::timestamp")]
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task issued elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Validated description.
    pub description: TaskDescription,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, description: TaskDescription, clock: &impl Clock) -> Self {
        Self {
            id,
            description,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted or remote data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the completion flag.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
