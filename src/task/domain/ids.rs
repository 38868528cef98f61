//! Identifier types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a task, stable for the task's lifetime.
///
/// Identifiers are either issued by the remote API or minted locally by a
/// [`FallbackIdScheme`] while the API is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// The value is kept verbatim, surrounding whitespace included, so a
    /// server-issued id is always sent back exactly as received.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Naming scheme for client-minted fallback identifiers.
///
/// A fallback id is the scheme prefix followed by a decimal counter, for
/// example `task-3`. Ids that do not match the scheme carry no suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackIdScheme {
    prefix: String,
}

impl FallbackIdScheme {
    /// Prefix used when none is configured.
    pub const DEFAULT_PREFIX: &'static str = "task-";

    /// First counter value handed out in a fresh process.
    pub const BASE_COUNTER: u64 = 1;

    /// Creates a scheme with the given prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the prefix is empty after
    /// trimming, since every minted id would then be a bare number.
    pub fn new(prefix: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = prefix.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self {
            prefix: normalized.to_owned(),
        })
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the fallback id for a counter value.
    #[must_use]
    pub fn mint(&self, counter: u64) -> TaskId {
        TaskId(format!("{}{counter}", self.prefix))
    }

    /// Extracts the numeric suffix from an id that follows this scheme.
    ///
    /// Returns `None` for server-issued ids and for anything after the
    /// prefix that is not a plain decimal number.
    #[must_use]
    pub fn suffix_of(&self, id: &TaskId) -> Option<u64> {
        let digits = id.as_str().strip_prefix(self.prefix.as_str())?;
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns the counter value that follows every fallback id in `ids`.
    ///
    /// Yields [`Self::BASE_COUNTER`] when no id matches the scheme.
    #[must_use]
    pub fn next_counter<'a>(&self, ids: impl IntoIterator<Item = &'a TaskId>) -> u64 {
        ids.into_iter()
            .filter_map(|id| self.suffix_of(id))
            .max()
            .map_or(Self::BASE_COUNTER, |highest| {
                highest.saturating_add(1).max(Self::BASE_COUNTER)
            })
    }
}

impl Default for FallbackIdScheme {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_owned(),
        }
    }
}
