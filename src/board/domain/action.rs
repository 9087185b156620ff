//! Action labels reported to inspection tooling.

use super::{TaskId, TaskStatus};
use std::fmt;

/// A store operation, labelled for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Startup load of the persisted snapshot.
    Rehydrate,
    /// A task was requested.
    AddTask {
        /// Requested column.
        status: TaskStatus,
    },
    /// A task status change was requested.
    ChangeTaskStatus {
        /// Target task.
        task_id: TaskId,
        /// Requested column.
        status: TaskStatus,
    },
    /// A drag was started.
    SetDraggingTaskId {
        /// Dragged task.
        task_id: TaskId,
    },
    /// A drag was cancelled.
    RemoveDraggingTaskId,
    /// The dragged task was dropped on a column.
    TaskDrop {
        /// Column the task was dropped on.
        status: TaskStatus,
    },
}

impl StoreAction {
    /// Returns the stable action name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rehydrate => "rehydrate",
            Self::AddTask { .. } => "add_task",
            Self::ChangeTaskStatus { .. } => "change_task_status",
            Self::SetDraggingTaskId { .. } => "set_dragging_task_id",
            Self::RemoveDraggingTaskId => "remove_dragging_task_id",
            Self::TaskDrop { .. } => "on_task_drop",
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a store operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    /// The state changed and subscribers were notified.
    Applied,
    /// The call was valid but had nothing to change.
    Ignored,
    /// The call was rejected before any state change.
    Rejected,
}

impl ActionOutcome {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Ignored => "ignored",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
