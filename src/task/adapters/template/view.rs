//! `minijinja` view that renders the task list as HTML fragments.

use crate::task::ports::{Notification, RenderRequest, TaskView};
use log::error;
use minijinja::{Environment, context};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

const TASK_LIST_TEMPLATE: &str = "task_list.html";
const EMPTY_STATE_TEMPLATE: &str = "empty_state.html";
const NOTIFICATION_TEMPLATE: &str = "notification.html";
const PAGE_TEMPLATE: &str = "page.html";

const TASK_LIST_SOURCE: &str = r#"<ul class="task-list" id="task-list">
{%- for task in tasks %}
  <li class="task-item{% if task.completed %} completed{% endif %}" data-task-id="{{ task.id }}">
    <input type="checkbox" class="task-toggle" aria-label="Mark task complete"{% if task.completed %} checked{% endif %}>
    <span class="task-description">{{ task.description }}</span>
    <button type="button" class="task-delete" aria-label="Delete task">Delete</button>
  </li>
{%- endfor %}
</ul>"#;

const EMPTY_STATE_SOURCE: &str =
    r#"<p class="empty-state" id="empty-state">No tasks yet. Add one above to get started.</p>"#;

const NOTIFICATION_SOURCE: &str =
    r#"<div class="notification notification-{{ severity }}" role="status">{{ message }}</div>"#;

const PAGE_SOURCE: &str = r#"<section class="todo-app">
{%- if notification %}
{{ notification | safe }}
{%- endif %}
{{ list | safe }}
</section>"#;

/// Errors raised while setting up the template environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("template error: {0}")]
pub struct TemplateViewError(String);

#[derive(Debug, Default)]
struct RenderedPage {
    list: String,
    notification: Option<String>,
}

/// View that renders tasks, the empty state and notifications to HTML.
///
/// The latest fragments are kept in memory; [`TemplateTaskView::page`]
/// assembles them. A render failure is logged and leaves the previous
/// fragment in place.
pub struct TemplateTaskView {
    environment: Environment<'static>,
    page: Mutex<RenderedPage>,
}

impl TemplateTaskView {
    /// Creates a view with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateViewError`] when a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, TemplateViewError> {
        let mut environment = Environment::new();
        for (name, source) in [
            (TASK_LIST_TEMPLATE, TASK_LIST_SOURCE),
            (EMPTY_STATE_TEMPLATE, EMPTY_STATE_SOURCE),
            (NOTIFICATION_TEMPLATE, NOTIFICATION_SOURCE),
            (PAGE_TEMPLATE, PAGE_SOURCE),
        ] {
            environment
                .add_template(name, source)
                .map_err(|err| TemplateViewError(err.to_string()))?;
        }
        Ok(Self {
            environment,
            page: Mutex::new(RenderedPage::default()),
        })
    }

    fn page_state(&self) -> MutexGuard<'_, RenderedPage> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render_template(&self, name: &str, ctx: minijinja::Value) -> Option<String> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|err| error!("failed to render {name}: {err}"))
            .ok()
    }

    /// Returns the most recently rendered list fragment.
    #[must_use]
    pub fn list_html(&self) -> String {
        self.page_state().list.clone()
    }

    /// Returns the notification fragment currently shown, if any.
    #[must_use]
    pub fn notification_html(&self) -> Option<String> {
        self.page_state().notification.clone()
    }

    /// Assembles the notification slot and the list into one fragment.
    #[must_use]
    pub fn page(&self) -> String {
        let (list, notification) = {
            let state = self.page_state();
            (state.list.clone(), state.notification.clone())
        };
        self.render_template(
            PAGE_TEMPLATE,
            context! { list => list.clone(), notification => notification },
        )
        .unwrap_or(list)
    }
}

impl TaskView for TemplateTaskView {
    fn render(&self, request: RenderRequest) {
        let rendered = match request {
            RenderRequest::Tasks(tasks) => {
                self.render_template(TASK_LIST_TEMPLATE, context! { tasks => tasks })
            }
            RenderRequest::Empty => self.render_template(EMPTY_STATE_TEMPLATE, context! {}),
        };
        if let Some(html) = rendered {
            self.page_state().list = html;
        }
    }

    fn notify(&self, notification: Notification) {
        let rendered = self.render_template(
            NOTIFICATION_TEMPLATE,
            context! {
                severity => notification.severity().as_str(),
                message => notification.message(),
            },
        );
        if let Some(html) = rendered {
            self.page_state().notification = Some(html);
        }
    }
}
