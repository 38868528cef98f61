//! Template-rendered view adapters.

mod view;

pub use view::{TemplateTaskView, TemplateViewError};
