//! Ordered task collection.

use super::{Task, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered sequence of tasks with unique identifiers.
///
/// Insertion order is preserved and new tasks are appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when a task with the same
    /// identifier is already present.
    pub fn push(&mut self, task: Task) -> Result<(), TaskDomainError> {
        if self.contains(task.id()) {
            return Err(TaskDomainError::DuplicateTaskId(task.id().clone()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Returns `true` when a task with the identifier is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by identifier for mutation.
    pub fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Removes a task by identifier, preserving the order of the rest.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Returns the tasks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Iterates over the task identifiers in order.
    #[must_use]
    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.iter().map(Task::id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TryFrom<Vec<Task>> for TaskList {
    type Error = TaskDomainError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id().clone()));
            }
        }
        Ok(Self { tasks })
    }
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
