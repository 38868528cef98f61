//! Shared world state for task list synchronization BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::task::{
    adapters::memory::{InMemoryKeyValueStore, InMemoryTaskApi, RecordingTaskView},
    services::{
        DispatchOutcome, TaskListController, TaskListResult, TaskPersistence, UiEvent, dispatch,
    },
};

/// Controller type used by the BDD world.
pub type WorldController =
    TaskListController<InMemoryTaskApi, InMemoryKeyValueStore, RecordingTaskView, DefaultClock>;

/// Scenario world for task list synchronization behaviour tests.
pub struct TaskSyncWorld {
    pub api: Arc<InMemoryTaskApi>,
    pub store: Arc<InMemoryKeyValueStore>,
    pub view: Arc<RecordingTaskView>,
    pub controller: Option<WorldController>,
    pub last_result: Option<TaskListResult<DispatchOutcome>>,
}

impl TaskSyncWorld {
    /// Creates a world with an online API and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api: Arc::new(InMemoryTaskApi::new()),
            store: Arc::new(InMemoryKeyValueStore::new()),
            view: Arc::new(RecordingTaskView::new()),
            controller: None,
            last_result: None,
        }
    }

    /// Starts a session over the world's API and store and dispatches the
    /// startup event.
    pub fn launch(&mut self) -> Result<(), eyre::Report> {
        self.view = Arc::new(RecordingTaskView::new());
        let mut controller = TaskListController::new(
            Arc::clone(&self.api),
            TaskPersistence::with_default_key(Arc::clone(&self.store)),
            Arc::clone(&self.view),
            Arc::new(DefaultClock),
        );
        run_async(dispatch(&mut controller, &UiEvent::Startup))?;
        self.controller = Some(controller);
        Ok(())
    }

    /// Dispatches `event` and records its result.
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<(), eyre::Report> {
        let controller = self
            .controller
            .as_mut()
            .ok_or_else(|| eyre::eyre!("application has not started in scenario world"))?;
        self.last_result = Some(run_async(dispatch(controller, event)));
        Ok(())
    }

    /// Returns the running controller.
    pub fn controller(&self) -> Result<&WorldController, eyre::Report> {
        self.controller
            .as_ref()
            .ok_or_else(|| eyre::eyre!("application has not started in scenario world"))
    }
}

impl Default for TaskSyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskSyncWorld {
    TaskSyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
