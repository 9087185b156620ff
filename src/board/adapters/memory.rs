//! In-memory adapters for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ActionOutcome, SnapshotName, StoreAction},
    ports::{ActionObserver, PersistenceAdapter, PersistenceError, PersistenceResult},
};

/// Thread-safe in-memory snapshot storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    slots: Arc<RwLock<HashMap<SnapshotName, String>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryPersistence {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding `value` under `name`.
    #[must_use]
    pub fn with_snapshot(name: SnapshotName, value: impl Into<String>) -> Self {
        let slots = HashMap::from([(name, value.into())]);
        Self {
            slots: Arc::new(RwLock::new(slots)),
            saves: Arc::default(),
        }
    }

    /// Returns the value currently stored under `name`.
    #[must_use]
    pub fn stored(&self, name: &SnapshotName) -> Option<String> {
        self.slots
            .read()
            .ok()
            .and_then(|guard| guard.get(name).cloned())
    }

    /// Returns how many saves have been issued.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceAdapter for InMemoryPersistence {
    async fn load(&self, name: &SnapshotName) -> PersistenceResult<Option<String>> {
        let guard = self
            .slots
            .read()
            .map_err(|err| PersistenceError::io(std::io::Error::other(err.to_string())))?;
        Ok(guard.get(name).cloned())
    }

    async fn save(&self, name: &SnapshotName, value: &str) -> PersistenceResult<()> {
        let mut guard = self
            .slots
            .write()
            .map_err(|err| PersistenceError::io(std::io::Error::other(err.to_string())))?;
        guard.insert(name.clone(), value.to_owned());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, name: &SnapshotName) -> PersistenceResult<()> {
        let mut guard = self
            .slots
            .write()
            .map_err(|err| PersistenceError::io(std::io::Error::other(err.to_string())))?;
        guard.remove(name);
        Ok(())
    }
}

/// Action observer that keeps every record for later inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActionLog {
    records: Arc<RwLock<Vec<(StoreAction, ActionOutcome)>>>,
}

impl InMemoryActionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all records in arrival order.
    #[must_use]
    pub fn records(&self) -> Vec<(StoreAction, ActionOutcome)> {
        self.records
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded action names in arrival order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.records()
            .iter()
            .map(|(action, _)| action.name())
            .collect()
    }
}

impl ActionObserver for InMemoryActionLog {
    fn record(&self, action: &StoreAction, outcome: ActionOutcome) {
        if let Ok(mut guard) = self.records.write() {
            guard.push((action.clone(), outcome));
        }
    }
}
