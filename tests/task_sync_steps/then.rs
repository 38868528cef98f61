//! Then steps for task list synchronization BDD scenarios.

use super::world::TaskSyncWorld;
use rstest_bdd_macros::then;
use todolist::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::TaskList,
    ports::{Notification, RenderRequest},
    services::TaskPersistence,
};

#[then("the number of tasks is {count:u64}")]
fn number_of_tasks(world: &TaskSyncWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = world.controller()?.tasks().len();
    eyre::ensure!(
        u64::try_from(actual)? == count,
        "expected {count} task(s), found {actual}"
    );
    Ok(())
}

#[then(r#"the last task has id "{id}" and description "{description}""#)]
fn last_task_has_id_and_description(
    world: &TaskSyncWorld,
    id: String,
    description: String,
) -> Result<(), eyre::Report> {
    let task = world
        .controller()?
        .tasks()
        .as_slice()
        .last()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    eyre::ensure!(
        task.id().as_str() == id,
        "expected id {id}, found {}",
        task.id()
    );
    eyre::ensure!(
        task.description().as_str() == description,
        "expected description {description}, found {}",
        task.description().as_str()
    );
    Ok(())
}

#[then(r#"the last task has description "{description}""#)]
fn last_task_has_description(
    world: &TaskSyncWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let task = world
        .controller()?
        .tasks()
        .as_slice()
        .last()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    eyre::ensure!(
        task.description().as_str() == description,
        "expected description {description}, found {}",
        task.description().as_str()
    );
    Ok(())
}

#[then("the degraded notification is shown")]
fn degraded_notification_shown(world: &TaskSyncWorld) -> Result<(), eyre::Report> {
    let current = world.view.current_notification();
    eyre::ensure!(
        current == Some(Notification::degraded()),
        "expected degraded notification, found {current:?}"
    );
    Ok(())
}

#[then(r#"the error notification "{message}" is shown"#)]
fn error_notification_shown(world: &TaskSyncWorld, message: String) -> Result<(), eyre::Report> {
    let current = world.view.current_notification();
    eyre::ensure!(
        current == Some(Notification::error(message.as_str())),
        "expected error notification '{message}', found {current:?}"
    );
    eyre::ensure!(
        world.last_result.as_ref().is_some_and(Result::is_err),
        "expected the last operation to be rejected"
    );
    Ok(())
}

#[then("the empty state is shown")]
fn empty_state_shown(world: &TaskSyncWorld) -> Result<(), eyre::Report> {
    let last = world.view.last_render();
    eyre::ensure!(
        last == Some(RenderRequest::Empty),
        "expected the empty state, found {last:?}"
    );
    Ok(())
}

#[then("the durable store holds {count:u64} tasks")]
fn durable_store_holds(world: &TaskSyncWorld, count: u64) -> Result<(), eyre::Report> {
    let raw = world
        .store
        .raw_value(TaskPersistence::<InMemoryKeyValueStore>::DEFAULT_KEY)
        .ok_or_else(|| eyre::eyre!("durable store holds no task list"))?;
    let stored: TaskList = serde_json::from_str(&raw)?;
    eyre::ensure!(
        u64::try_from(stored.len())? == count,
        "expected {count} stored task(s), found {}",
        stored.len()
    );
    Ok(())
}
