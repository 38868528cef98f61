//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use todolist::task::{
    adapters::memory::{InMemoryKeyValueStore, InMemoryTaskApi, RecordingTaskView},
    services::{TaskListController, TaskPersistence},
};

/// Clock pinned to one instant so fallback tasks have a known timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(pub DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Controller type wired to the in-memory adapters.
pub type TestController =
    TaskListController<InMemoryTaskApi, InMemoryKeyValueStore, RecordingTaskView, FrozenClock>;

/// Adapters shared across application restarts.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Remote API stand-in.
    pub api: Arc<InMemoryTaskApi>,
    /// Durable store that survives restarts.
    pub store: Arc<InMemoryKeyValueStore>,
}

impl Environment {
    /// Starts a new application session: a fresh view and controller over
    /// the shared API and store, with the list restored from the store.
    pub fn launch(&self) -> (TestController, Arc<RecordingTaskView>) {
        let view = Arc::new(RecordingTaskView::new());
        let mut controller = TaskListController::new(
            Arc::clone(&self.api),
            TaskPersistence::with_default_key(Arc::clone(&self.store)),
            Arc::clone(&view),
            Arc::new(frozen_clock()),
        );
        controller.load();
        (controller, view)
    }
}

/// Returns the clock every session uses.
pub fn frozen_clock() -> FrozenClock {
    FrozenClock(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 15, 0)
            .single()
            .expect("valid frozen timestamp"),
    )
}

/// Provides an online API with an empty, available store.
#[fixture]
pub fn environment() -> Environment {
    Environment {
        api: Arc::new(InMemoryTaskApi::new()),
        store: Arc::new(InMemoryKeyValueStore::new()),
    }
}
