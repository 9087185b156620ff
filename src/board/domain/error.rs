//! Error types for board domain validation, parsing and snapshot decoding.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The snapshot slot name cannot be used as a storage key.
    #[error("invalid snapshot name '{0}', expected ASCII letters, digits, '-' or '_'")]
    InvalidSnapshotName(String),

    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A persisted task is stored under a key that differs from its id.
    #[error("task {id} is stored under mismatched key {key}")]
    MismatchedTaskKey {
        /// Map key the task was found under.
        key: TaskId,
        /// Identifier carried by the task itself.
        id: TaskId,
    },
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Errors returned while encoding or decoding persisted snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not match the envelope shape.
    #[error("invalid snapshot document: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible store version.
    #[error("snapshot version {found} does not match expected version {expected}")]
    VersionMismatch {
        /// Version the store expects.
        expected: u32,
        /// Version found in the persisted document.
        found: u32,
    },
}
