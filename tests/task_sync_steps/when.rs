//! When steps for task list synchronization BDD scenarios.

use super::world::TaskSyncWorld;
use rstest_bdd_macros::when;
use todolist::task::{domain::TaskId, services::UiEvent};

#[when(r#"the user submits "{description}""#)]
fn user_submits(world: &mut TaskSyncWorld, description: String) -> Result<(), eyre::Report> {
    world.dispatch(&UiEvent::Submit { description })
}

#[when("the user submits a blank description")]
fn user_submits_blank(world: &mut TaskSyncWorld) -> Result<(), eyre::Report> {
    world.dispatch(&UiEvent::Submit {
        description: "   ".to_owned(),
    })
}

#[when(r#"the user toggles task "{id}""#)]
fn user_toggles(world: &mut TaskSyncWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).map_err(|err| eyre::eyre!("invalid task id: {err}"))?;
    world.dispatch(&UiEvent::Toggle { id: task_id })
}

#[when("the user deletes every task")]
fn user_deletes_every_task(world: &mut TaskSyncWorld) -> Result<(), eyre::Report> {
    let ids: Vec<TaskId> = world.controller()?.tasks().ids().cloned().collect();
    for task_id in ids {
        world.dispatch(&UiEvent::Delete { id: task_id })?;
    }
    Ok(())
}

#[when("the application restarts")]
fn application_restarts(world: &mut TaskSyncWorld) -> Result<(), eyre::Report> {
    world.launch()
}
