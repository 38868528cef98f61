//! In-memory adapter implementations for testing.
//!
//! These adapters are thread-safe and let tests switch the remote API and
//! the durable store into failure modes on demand.

mod api;
mod store;
mod view;

pub use api::{ApiCall, InMemoryTaskApi};
pub use store::InMemoryKeyValueStore;
pub use view::RecordingTaskView;
