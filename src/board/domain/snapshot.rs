//! Persisted snapshot document.
//!
//! The document shape is
//! `{"state": {"tasks": {<id>: Task}, "draggingTaskId"?: string}, "version": n}`.
//! The envelope belongs to the persistence wrapper; the board only supplies
//! the task map and, when configured, the dragged task identifier.

use super::{BoardState, DragSession, SnapshotError, TaskId, TaskRepository};
use serde::{Deserialize, Serialize};

/// Serializable projection of [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    tasks: TaskRepository,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dragging_task_id: Option<TaskId>,
}

impl BoardSnapshot {
    /// Captures `state`, including the dragged task only when `include_drag`
    /// is set.
    #[must_use]
    pub fn capture(state: &BoardState, include_drag: bool) -> Self {
        let dragging_task_id = if include_drag {
            state.drag().task_id().cloned()
        } else {
            None
        };
        Self {
            tasks: state.tasks().clone(),
            dragging_task_id,
        }
    }

    /// Returns the captured tasks.
    #[must_use]
    pub const fn tasks(&self) -> &TaskRepository {
        &self.tasks
    }

    /// Returns the captured drag identifier, if any.
    #[must_use]
    pub const fn dragging_task_id(&self) -> Option<&TaskId> {
        self.dragging_task_id.as_ref()
    }

    /// Rebuilds board state, restoring the drag only when `restore_drag` is
    /// set.
    #[must_use]
    pub fn into_state(self, restore_drag: bool) -> BoardState {
        let drag = if restore_drag {
            DragSession::from_task_id(self.dragging_task_id)
        } else {
            DragSession::Idle
        };
        BoardState::new(self.tasks, drag)
    }
}

/// Versioned wrapper around a [`BoardSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    state: BoardSnapshot,
    version: u32,
}

impl SnapshotEnvelope {
    /// Wraps a snapshot with the store version.
    #[must_use]
    pub const fn new(state: BoardSnapshot, version: u32) -> Self {
        Self { state, version }
    }

    /// Returns the wrapped snapshot.
    #[must_use]
    pub const fn state(&self) -> &BoardSnapshot {
        &self.state
    }

    /// Returns the envelope version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Encodes the envelope as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON document and checks it was written by `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed documents or invalid
    /// task data, and [`SnapshotError::VersionMismatch`] when the versions
    /// differ.
    pub fn decode(raw: &str, expected_version: u32) -> Result<BoardSnapshot, SnapshotError> {
        let envelope: Self = serde_json::from_str(raw)?;
        if envelope.version != expected_version {
            return Err(SnapshotError::VersionMismatch {
                expected: expected_version,
                found: envelope.version,
            });
        }
        Ok(envelope.state)
    }
}
