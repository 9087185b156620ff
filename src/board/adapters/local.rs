//! Durable snapshot storage in a local directory.
//!
//! Each slot is a `<name>.json` file inside a directory opened with
//! capability-based filesystem access, so the adapter can never touch paths
//! outside its root.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::board::{
    domain::SnapshotName,
    ports::{PersistenceAdapter, PersistenceError, PersistenceResult},
};

/// Snapshot storage backed by JSON files in one directory.
///
/// Filesystem calls run on tokio's blocking pool. Clones share the same
/// directory handle.
#[derive(Debug, Clone)]
pub struct LocalFilePersistence {
    dir: Arc<Dir>,
}

impl LocalFilePersistence {
    /// Opens (creating if needed) the storage directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: &Utf8Path) -> PersistenceResult<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(PersistenceError::io)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(PersistenceError::io)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PersistenceResult<T>
    where
        F: FnOnce(&Dir) -> PersistenceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || f(&dir))
            .await
            .map_err(PersistenceError::io)?
    }
}

fn ensure_json(value: &str) -> PersistenceResult<()> {
    serde_json::from_str::<serde_json::Value>(value)
        .map(drop)
        .map_err(PersistenceError::io)
}

#[async_trait]
impl PersistenceAdapter for LocalFilePersistence {
    async fn load(&self, name: &SnapshotName) -> PersistenceResult<Option<String>> {
        let file_name = name.file_name();
        self.run_blocking(move |dir| match dir.read_to_string(&file_name) {
            Ok(contents) => {
                ensure_json(&contents)?;
                Ok(Some(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::io(err)),
        })
        .await
    }

    async fn save(&self, name: &SnapshotName, value: &str) -> PersistenceResult<()> {
        ensure_json(value)?;
        let file_name = name.file_name();
        let value = value.to_owned();
        self.run_blocking(move |dir| {
            let staging = format!("{file_name}.tmp");
            dir.write(&staging, value).map_err(PersistenceError::io)?;
            dir.rename(&staging, dir, &file_name)
                .map_err(PersistenceError::io)
        })
        .await
    }

    async fn remove(&self, name: &SnapshotName) -> PersistenceResult<()> {
        let file_name = name.file_name();
        self.run_blocking(move |dir| match dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::io(err)),
        })
        .await
    }
}
