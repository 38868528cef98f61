//! Degraded-mode behaviour: remote outages and durable store loss.

use super::helpers::{Environment, environment, frozen_clock};
use rstest::rstest;
use todolist::task::{
    ports::{Notification, Severity},
    services::SyncStatus,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_tasks_are_restored_and_never_reuse_ids(environment: Environment) {
    environment.api.go_offline();
    let (mut offline_session, view) = environment.launch();

    let first = offline_session
        .create("buy milk")
        .await
        .expect("create succeeds in degraded mode");

    assert_eq!(first.sync(), SyncStatus::LocalOnly);
    assert_eq!(first.value().id().as_str(), "task-1");
    assert_eq!(first.value().created_at(), frozen_clock().0);
    assert_eq!(view.current_notification(), Some(Notification::degraded()));

    let (mut next_session, _) = environment.launch();
    assert_eq!(next_session.tasks().get(first.value().id()), Some(first.value()));

    let second = next_session
        .create("buy bread")
        .await
        .expect("create succeeds in degraded mode");
    assert_eq!(second.value().id().as_str(), "task-2");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outage_mid_session_degrades_then_recovers(environment: Environment) {
    let (mut session, _) = environment.launch();
    let synced = session
        .create("write report")
        .await
        .expect("create succeeds")
        .into_value();

    environment.api.go_offline();
    let toggled = session
        .toggle(synced.id())
        .await
        .expect("toggle succeeds in degraded mode");
    environment.api.go_online();
    let recovered = session
        .create("send report")
        .await
        .expect("create succeeds");

    assert!(toggled.is_degraded());
    assert!(toggled.value().is_completed());
    assert_eq!(recovered.sync(), SyncStatus::Synced);
    assert_eq!(session.tasks().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn server_errors_still_delete_locally(environment: Environment) {
    let (mut session, view) = environment.launch();
    let created = session
        .create("obsolete")
        .await
        .expect("create succeeds")
        .into_value();
    environment
        .api
        .fail_with_status(503, "Service unavailable");

    let deleted = session
        .delete(created.id())
        .await
        .expect("delete succeeds in degraded mode");

    assert!(deleted.is_degraded());
    assert!(session.tasks().is_empty());
    assert_eq!(view.current_notification(), Some(Notification::degraded()));
    let (restarted, _) = environment.launch();
    assert!(restarted.tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storage_loss_warns_once_and_keeps_last_saved_list(environment: Environment) {
    let (mut session, view) = environment.launch();
    session.create("saved").await.expect("create succeeds");

    environment.store.set_available(false);
    session.create("unsaved").await.expect("create succeeds");
    session.create("also unsaved").await.expect("create succeeds");

    let warnings = view
        .notifications()
        .iter()
        .filter(|notification| notification.severity() == Severity::StorageWarning)
        .count();
    assert_eq!(warnings, 1);
    assert_eq!(session.tasks().len(), 3);

    environment.store.set_available(true);
    let (restarted, _) = environment.launch();
    let descriptions: Vec<&str> = restarted
        .tasks()
        .iter()
        .map(|task| task.description().as_str())
        .collect();
    assert_eq!(descriptions, vec!["saved"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unavailable_store_at_launch_runs_in_memory(environment: Environment) {
    environment.store.set_available(false);
    let (mut session, view) = environment.launch();

    assert!(session.tasks().is_empty());
    let created = session
        .create("ephemeral")
        .await
        .expect("create succeeds")
        .into_value();
    session.toggle(created.id()).await.expect("toggle succeeds");

    assert_eq!(session.tasks().len(), 1);
    assert_eq!(
        view.notifications()
            .iter()
            .filter(|notification| notification.severity() == Severity::StorageWarning)
            .count(),
        1
    );
}
