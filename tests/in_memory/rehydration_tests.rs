//! In-memory integration tests for restarting a store from storage.

use std::collections::HashSet;
use std::sync::Arc;

use rstest::rstest;
use taskboard::board::{
    adapters::InMemoryPersistence,
    domain::{TaskRepository, TaskStatus},
    services::StoreConfig,
};

use super::helpers::{persistence, start_store, task_id, two_task_config};

fn task_set(tasks: &TaskRepository) -> HashSet<(String, String, TaskStatus)> {
    tasks
        .iter()
        .map(|task| {
            (
                task.id().to_string(),
                task.title().to_string(),
                task.status(),
            )
        })
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restarted_store_sees_previous_session(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let first_session = start_store(&persistence, two_task_config.clone()).await;
    first_session
        .add_task("Carry over", TaskStatus::InProgress)
        .expect("task should be added");
    first_session.change_task_status(&task_id("A"), TaskStatus::Done);
    let expected = first_session.state().tasks().clone();
    first_session.shutdown().await;

    let empty_seed = two_task_config.with_seed(TaskRepository::new());
    let second_session = start_store(&persistence, empty_seed).await;

    assert_eq!(task_set(second_session.state().tasks()), task_set(&expected));
    assert!(!second_session.is_dragging());
    second_session.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stores_with_different_names_do_not_share_state(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let sprint = two_task_config.clone().with_name(
        taskboard::board::domain::SnapshotName::new("sprint-board").expect("valid name"),
    );
    let board = start_store(&persistence, sprint).await;
    board
        .add_task("Sprint only", TaskStatus::Open)
        .expect("task should be added");
    board.shutdown().await;

    let default_board = start_store(&persistence, two_task_config.clone()).await;
    assert_eq!(default_board.state().tasks(), two_task_config.seed());
    default_board.shutdown().await;
}
