//! In-memory integration tests for board operations.

use std::sync::Arc;

use rstest::rstest;
use taskboard::board::{
    adapters::InMemoryPersistence,
    domain::{Task, TaskStatus},
    services::StoreConfig,
};

use super::helpers::{persistence, start_store, task_id, two_task_config};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn columns_follow_insertion_order(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let store = start_store(&persistence, two_task_config).await;

    let first = store
        .add_task("First new", TaskStatus::Open)
        .expect("task should be added");
    let second = store
        .add_task("Second new", TaskStatus::Open)
        .expect("task should be added");

    let open: Vec<String> = store
        .tasks_by_status(TaskStatus::Open)
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    assert_eq!(
        open,
        vec!["A".to_owned(), first.id().to_string(), second.id().to_string()]
    );
    assert_ne!(first.id(), second.id());
    store.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_and_drop_across_all_columns(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let store = start_store(&persistence, two_task_config).await;

    for status in [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Open] {
        store.set_dragging_task_id(task_id("A"));
        assert!(store.is_dragging());
        store.on_task_drop(status);
        assert!(!store.is_dragging());
        assert_eq!(
            store.task(&task_id("A")).map(|task| task.status()),
            Some(status)
        );
    }

    store.flush().await;
    assert_eq!(persistence.save_count(), 3);
    store.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_dangling_reference_only_ends_the_drag(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let store = start_store(&persistence, two_task_config).await;
    let tasks_before = store.state().tasks().clone();

    store.set_dragging_task_id(task_id("deleted-elsewhere"));
    store.on_task_drop(TaskStatus::Done);
    store.flush().await;

    assert!(!store.is_dragging());
    assert_eq!(store.state().tasks(), &tasks_before);
    assert_eq!(persistence.save_count(), 0);
    store.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_drag_leaves_tasks_in_place(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let store = start_store(&persistence, two_task_config).await;

    store.set_dragging_task_id(task_id("B"));
    store.remove_dragging_task_id();
    store.on_task_drop(TaskStatus::Done);

    assert_eq!(
        store.task(&task_id("B")).map(|task| task.status()),
        Some(TaskStatus::InProgress)
    );
    let done: Vec<Task> = store.tasks_by_status(TaskStatus::Done);
    assert!(done.is_empty());
    store.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_onto_the_current_column_writes_nothing(
    persistence: Arc<InMemoryPersistence>,
    two_task_config: StoreConfig,
) {
    let store = start_store(&persistence, two_task_config).await;

    store.set_dragging_task_id(task_id("B"));
    store.on_task_drop(TaskStatus::InProgress);
    store.flush().await;

    assert!(!store.is_dragging());
    assert_eq!(
        store.task(&task_id("B")).map(|task| task.status()),
        Some(TaskStatus::InProgress)
    );
    assert_eq!(persistence.save_count(), 0);
    store.shutdown().await;
}
