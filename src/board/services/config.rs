//! Store controller configuration.

use crate::board::domain::{SnapshotName, TaskRepository};

/// Settings for a [`StoreController`](super::StoreController).
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::SnapshotName;
/// use taskboard::board::services::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.name().as_str(), "task-store");
/// assert!(!config.persist_drag_session());
///
/// let custom = StoreConfig::default()
///     .with_name(SnapshotName::new("sprint-board").expect("valid name"))
///     .with_drag_persistence(true);
/// assert!(custom.persist_drag_session());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    name: SnapshotName,
    snapshot_version: u32,
    persist_drag_session: bool,
    seed: TaskRepository,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: SnapshotName::default(),
            snapshot_version: 0,
            persist_drag_session: false,
            seed: TaskRepository::seeded(),
        }
    }
}

impl StoreConfig {
    /// Sets the snapshot slot name.
    #[must_use]
    pub fn with_name(mut self, name: SnapshotName) -> Self {
        self.name = name;
        self
    }

    /// Sets the snapshot format version written and accepted by the store.
    #[must_use]
    pub const fn with_snapshot_version(mut self, version: u32) -> Self {
        self.snapshot_version = version;
        self
    }

    /// Controls whether the drag session is persisted and restored.
    #[must_use]
    pub const fn with_drag_persistence(mut self, enabled: bool) -> Self {
        self.persist_drag_session = enabled;
        self
    }

    /// Replaces the tasks used when no snapshot can be loaded.
    #[must_use]
    pub fn with_seed(mut self, seed: TaskRepository) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the snapshot slot name.
    #[must_use]
    pub const fn name(&self) -> &SnapshotName {
        &self.name
    }

    /// Returns the snapshot format version.
    #[must_use]
    pub const fn snapshot_version(&self) -> u32 {
        self.snapshot_version
    }

    /// Returns `true` when drag state is persisted.
    #[must_use]
    pub const fn persist_drag_session(&self) -> bool {
        self.persist_drag_session
    }

    /// Returns the seed tasks.
    #[must_use]
    pub const fn seed(&self) -> &TaskRepository {
        &self.seed
    }
}
