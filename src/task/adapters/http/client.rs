//! `reqwest` client for the REST task API.

use crate::task::{
    domain::{Task, TaskDescription, TaskId},
    ports::{TaskApi, TaskApiError, TaskApiResult},
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct CreateTaskBody<'a> {
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateTaskBody {
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Remote task API over HTTP.
///
/// Requests go to `{base_url}/api/tasks` and `{base_url}/api/tasks/{id}`.
/// Without a timeout a hung request waits indefinitely.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base_url: Url,
    client: Client,
}

impl HttpTaskApi {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the URL cannot be parsed or
    /// is not an `http(s)` URL, or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> TaskApiResult<Self> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|err| TaskApiError::Transport(format!("invalid base URL: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(TaskApiError::Transport(format!(
                "unsupported base URL: {parsed}"
            )));
        }

        let mut builder = Client::builder();
        if let Some(duration) = timeout {
            builder = builder.timeout(duration);
        }
        let client = builder.build().map_err(transport)?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, id: Option<&TaskId>) -> TaskApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TaskApiError::Transport(format!("unsupported base URL: {}", self.base_url))
            })?;
            segments.pop_if_empty().push("api").push("tasks");
            if let Some(task_id) = id {
                segments.push(task_id.as_str());
            }
        }
        Ok(url)
    }
}

fn transport(err: reqwest::Error) -> TaskApiError {
    TaskApiError::Transport(err.to_string())
}

/// Passes success responses through and turns failures into
/// [`TaskApiError::Remote`], reading the `{"error": ...}` body when present.
async fn ensure_success(response: Response) -> TaskApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let fallback = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_owned();
    let message = response
        .json::<ErrorBody>()
        .await
        .map_or(fallback, |body| body.error);
    Err(TaskApiError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn create(&self, description: &TaskDescription) -> TaskApiResult<Task> {
        let sent = self
            .client
            .post(self.endpoint(None)?)
            .json(&CreateTaskBody {
                description: description.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;
        ensure_success(sent)
            .await?
            .json::<Task>()
            .await
            .map_err(|err| TaskApiError::InvalidResponse(err.to_string()))
    }

    async fn update_completion(&self, id: &TaskId, completed: bool) -> TaskApiResult<()> {
        let sent = self
            .client
            .put(self.endpoint(Some(id))?)
            .json(&UpdateTaskBody { completed })
            .send()
            .await
            .map_err(transport)?;
        ensure_success(sent).await.map(drop)
    }

    async fn delete(&self, id: &TaskId) -> TaskApiResult<()> {
        let sent = self
            .client
            .delete(self.endpoint(Some(id))?)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(sent).await.map(drop)
    }
}
