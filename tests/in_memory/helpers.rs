//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::{InMemoryActionLog, InMemoryPersistence},
    domain::{Task, TaskId, TaskRepository, TaskStatus, TaskTitle},
    services::{StoreConfig, StoreController},
};

/// Store type used across in-memory integration tests.
pub type TestStore = StoreController<InMemoryActionLog>;

/// Builds a task identifier, panicking on invalid test input.
pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Configuration seeded with `A` open and `B` in progress.
#[fixture]
pub fn two_task_config() -> StoreConfig {
    let seed = TaskRepository::from_tasks([
        Task::with_id(
            task_id("A"),
            TaskTitle::new("A").expect("valid title"),
            TaskStatus::Open,
        ),
        Task::with_id(
            task_id("B"),
            TaskTitle::new("B").expect("valid title"),
            TaskStatus::InProgress,
        ),
    ])
    .expect("unique task ids");
    StoreConfig::default().with_seed(seed)
}

/// Provides fresh in-memory storage for each test.
#[fixture]
pub fn persistence() -> Arc<InMemoryPersistence> {
    Arc::new(InMemoryPersistence::new())
}

/// Starts a store over `persistence`.
pub async fn start_store(persistence: &Arc<InMemoryPersistence>, config: StoreConfig) -> TestStore {
    StoreController::init(
        Arc::clone(persistence),
        Arc::new(InMemoryActionLog::new()),
        config,
    )
    .await
}
