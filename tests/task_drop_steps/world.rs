//! Shared world state for drag and drop BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::{InMemoryActionLog, InMemoryPersistence},
    domain::{Task, TaskId},
    services::{BoardStoreResult, StoreController},
};

/// Store type used by the BDD world.
pub type TestStore = StoreController<InMemoryActionLog>;

/// Scenario world for drag and drop behaviour tests.
pub struct TaskDropWorld {
    pub persistence: Arc<InMemoryPersistence>,
    pub store: Option<TestStore>,
    pub last_add_result: Option<BoardStoreResult<Task>>,
}

impl TaskDropWorld {
    /// Creates a world with no store started yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            persistence: Arc::new(InMemoryPersistence::new()),
            store: None,
            last_add_result: None,
        }
    }

    /// Returns the started store.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been set up by a given step.
    pub fn store(&self) -> Result<&TestStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been set up in scenario world"))
    }
}

impl Default for TaskDropWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDropWorld {
    TaskDropWorld::default()
}

/// Parses a task identifier from step text.
///
/// # Errors
///
/// Returns an error when the identifier is blank.
pub fn parse_task_id(value: &str) -> Result<TaskId, eyre::Report> {
    TaskId::new(value).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
