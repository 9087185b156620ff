//! Drag-and-drop session state machine.

use super::TaskId;

/// Tracks which task, if any, is being dragged between board columns.
///
/// The dragged identifier is a lookup key, not a reference: the task may no
/// longer exist by the time it is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(TaskId),
}

impl DragSession {
    /// Returns `true` while a task is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the dragged task identifier, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(id) => Some(id),
        }
    }

    /// Starts dragging `task_id`, replacing any drag already in progress.
    #[must_use]
    pub const fn start(task_id: TaskId) -> Self {
        Self::Dragging(task_id)
    }

    /// Restores a session from an optional persisted identifier.
    #[must_use]
    pub fn from_task_id(task_id: Option<TaskId>) -> Self {
        task_id.map_or(Self::Idle, Self::Dragging)
    }
}
