//! Given steps for task list synchronization BDD scenarios.

use super::world::TaskSyncWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::task::{
    adapters::memory::InMemoryKeyValueStore,
    ports::KeyValueStore,
    services::{TaskPersistence, UiEvent},
};

#[given("the task server is unreachable")]
fn server_unreachable(world: &mut TaskSyncWorld) {
    world.api.go_offline();
}

#[given(r#"the durable store holds a task "{id}" described "{description}""#)]
fn store_holds_task(
    world: &mut TaskSyncWorld,
    id: String,
    description: String,
) -> Result<(), eyre::Report> {
    let record = serde_json::json!([{
        "id": id,
        "description": description,
        "completed": false,
        "created_at": "2024-05-01T08:30:00Z",
    }]);
    world
        .store
        .set(
            TaskPersistence::<InMemoryKeyValueStore>::DEFAULT_KEY,
            &record.to_string(),
        )
        .wrap_err("seed durable store")
}

#[given("the application has started")]
fn application_started(world: &mut TaskSyncWorld) -> Result<(), eyre::Report> {
    world.launch()
}

#[given(r#"the user has submitted "{description}""#)]
fn user_has_submitted(world: &mut TaskSyncWorld, description: String) -> Result<(), eyre::Report> {
    world.dispatch(&UiEvent::Submit { description })?;
    match world.last_result.take() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected submit to succeed, got {other:?}")),
    }
}
