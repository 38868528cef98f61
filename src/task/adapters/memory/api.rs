//! In-memory stand-in for the remote task API.

use crate::task::{
    domain::{PersistedTaskData, Task, TaskDescription, TaskId},
    ports::{TaskApi, TaskApiError, TaskApiResult},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

/// A call received by [`InMemoryTaskApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// `POST /api/tasks` with the trimmed description.
    Create(String),
    /// `PUT /api/tasks/{id}` with the requested completion flag.
    UpdateCompletion(TaskId, bool),
    /// `DELETE /api/tasks/{id}`.
    Delete(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ApiMode {
    Online,
    Offline,
    Failing { status: u16, message: String },
}

/// In-memory task API that behaves like the server.
///
/// Created tasks receive UUID identifiers. Updates and deletions of ids the
/// API never issued answer `404`. The API can be switched offline (transport
/// failure) or into a failing mode that answers every call with a fixed
/// status.
#[derive(Debug, Clone)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<InMemoryApiState>>,
}

#[derive(Debug)]
struct InMemoryApiState {
    mode: ApiMode,
    known_ids: HashSet<TaskId>,
    calls: Vec<ApiCall>,
}

impl Default for InMemoryTaskApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskApi {
    /// Creates an online API with no tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryApiState {
                mode: ApiMode::Online,
                known_ids: HashSet::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Creates an API whose every call fails with a transport error.
    #[must_use]
    pub fn offline() -> Self {
        let api = Self::new();
        api.set_mode(ApiMode::Offline);
        api
    }

    /// Makes every subsequent call fail with a transport error.
    pub fn go_offline(&self) {
        self.set_mode(ApiMode::Offline);
    }

    /// Restores normal behaviour.
    pub fn go_online(&self) {
        self.set_mode(ApiMode::Online);
    }

    /// Makes every subsequent call answer with `status` and `message`.
    pub fn fail_with_status(&self, status: u16, message: impl Into<String>) {
        self.set_mode(ApiMode::Failing {
            status,
            message: message.into(),
        });
    }

    /// Returns the calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    /// Returns `true` when the API issued `id` and has not deleted it.
    #[must_use]
    pub fn knows(&self, id: &TaskId) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.known_ids.contains(id))
    }

    fn set_mode(&self, mode: ApiMode) {
        if let Ok(mut state) = self.state.write() {
            state.mode = mode;
        }
    }

    /// Records `call` and fails it when the API is not online.
    fn receive(&self, call: ApiCall) -> TaskApiResult<RwLockWriteGuard<'_, InMemoryApiState>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskApiError::Transport(err.to_string()))?;
        state.calls.push(call);
        let failure = match &state.mode {
            ApiMode::Online => None,
            ApiMode::Offline => Some(TaskApiError::Transport("connection refused".to_owned())),
            ApiMode::Failing { status, message } => Some(TaskApiError::Remote {
                status: *status,
                message: message.clone(),
            }),
        };
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(state)
    }
}

fn not_found(id: &TaskId) -> TaskApiError {
    TaskApiError::Remote {
        status: 404,
        message: format!("Task {id} not found"),
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn create(&self, description: &TaskDescription) -> TaskApiResult<Task> {
        let mut state = self.receive(ApiCall::Create(description.as_str().to_owned()))?;
        let id = TaskId::new(Uuid::new_v4().to_string())
            .map_err(|err| TaskApiError::InvalidResponse(err.to_string()))?;
        state.known_ids.insert(id.clone());
        Ok(Task::from_persisted(PersistedTaskData {
            id,
            description: description.clone(),
            completed: false,
            created_at: Utc::now(),
        }))
    }

    async fn update_completion(&self, id: &TaskId, completed: bool) -> TaskApiResult<()> {
        let state = self.receive(ApiCall::UpdateCompletion(id.clone(), completed))?;
        if !state.known_ids.contains(id) {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskApiResult<()> {
        let mut state = self.receive(ApiCall::Delete(id.clone()))?;
        if !state.known_ids.remove(id) {
            return Err(not_found(id));
        }
        Ok(())
    }
}
