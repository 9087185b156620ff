//! Persistence port for named snapshot slots.

use crate::board::domain::SnapshotName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Uniform get/set/remove contract over a named serialized snapshot.
///
/// Implementations make no ordering promise between overlapping `save`
/// calls for the same name. Callers that need ordered writes must sequence
/// them.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Loads the serialized snapshot stored under `name`.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the storage transport fails.
    async fn load(&self, name: &SnapshotName) -> PersistenceResult<Option<String>>;

    /// Stores `value` under `name`, overwriting any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the storage transport fails.
    async fn save(&self, name: &SnapshotName, value: &str) -> PersistenceResult<()>;

    /// Removes the snapshot stored under `name`.
    ///
    /// Best effort: some adapters only log the request, so callers must not
    /// rely on the slot being cleared.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the storage transport fails.
    async fn remove(&self, name: &SnapshotName) -> PersistenceResult<()>;
}

/// Errors returned by persistence adapters.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// Storage transport failure.
    #[error("persistence I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),

    /// The adapter was configured with unusable settings.
    #[error("invalid persistence configuration: {0}")]
    Configuration(String),
}

impl PersistenceError {
    /// Wraps a transport error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
