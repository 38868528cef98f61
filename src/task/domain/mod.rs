//! Domain model for the todo list.
//!
//! The domain holds the task entity, its validated scalar values and the
//! ordered task list, with no knowledge of the remote API, the durable store
//! or the view.

mod description;
mod error;
mod ids;
mod task;
mod task_list;
mod timestamp;

pub use description::TaskDescription;
pub use error::TaskDomainError;
pub use ids::{FallbackIdScheme, TaskId};
pub use task::{PersistedTaskData, Task};
pub use task_list::TaskList;
