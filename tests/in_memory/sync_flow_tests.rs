//! Online task list flows across application restarts.

use super::helpers::{Environment, environment};
use rstest::rstest;
use todolist::task::{
    adapters::memory::ApiCall,
    domain::{Task, TaskId},
    ports::RenderRequest,
    services::SyncStatus,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_survive_restart_in_order(environment: Environment) {
    let (mut first_session, _) = environment.launch();
    for description in ["wash car", "pay rent", "call mum"] {
        let outcome = first_session
            .create(description)
            .await
            .expect("create succeeds");
        assert_eq!(outcome.sync(), SyncStatus::Synced);
    }
    let rent_id = first_session
        .tasks()
        .iter()
        .find(|task| task.description().as_str() == "pay rent")
        .map(|task| task.id().clone())
        .expect("rent task exists");
    first_session
        .toggle(&rent_id)
        .await
        .expect("toggle succeeds");

    let (second_session, view) = environment.launch();

    assert_eq!(second_session.tasks(), first_session.tasks());
    assert!(
        second_session
            .tasks()
            .get(&rent_id)
            .is_some_and(Task::is_completed)
    );
    assert_eq!(
        view.last_render(),
        Some(RenderRequest::Tasks(
            second_session.tasks().as_slice().to_vec()
        ))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_receives_every_change(environment: Environment) {
    let (mut session, _) = environment.launch();

    let created = session
        .create("  sort post  ")
        .await
        .expect("create succeeds")
        .into_value();
    session.toggle(created.id()).await.expect("toggle succeeds");
    session.delete(created.id()).await.expect("delete succeeds");

    assert_eq!(
        environment.api.calls(),
        vec![
            ApiCall::Create("sort post".to_owned()),
            ApiCall::UpdateCompletion(created.id().clone(), true),
            ApiCall::Delete(created.id().clone()),
        ]
    );
    assert!(session.tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_stay_deleted_after_restart(environment: Environment) {
    let (mut first_session, _) = environment.launch();
    let keep = first_session
        .create("keep")
        .await
        .expect("create succeeds")
        .into_value();
    let drop_me = first_session
        .create("drop")
        .await
        .expect("create succeeds")
        .into_value();
    first_session
        .delete(drop_me.id())
        .await
        .expect("delete succeeds");

    let (second_session, _) = environment.launch();

    let ids: Vec<&TaskId> = second_session.tasks().ids().collect();
    assert_eq!(ids, vec![keep.id()]);
}

#[rstest]
fn launching_alone_writes_nothing(environment: Environment) {
    let (session, view) = environment.launch();

    assert!(session.tasks().is_empty());
    assert!(environment.store.is_empty());
    assert_eq!(view.last_render(), Some(RenderRequest::Empty));
}
