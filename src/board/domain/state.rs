//! Combined board state published to subscribers.

use super::{BoardDomainError, DragSession, Task, TaskId, TaskRepository, TaskStatus};

/// Complete observable board state.
///
/// Transition methods return the next state instead of mutating, and return
/// `None` when the call would not change anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: TaskRepository,
    drag: DragSession,
}

impl BoardState {
    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(tasks: TaskRepository, drag: DragSession) -> Self {
        Self { tasks, drag }
    }

    /// Returns the task repository.
    #[must_use]
    pub const fn tasks(&self) -> &TaskRepository {
        &self.tasks
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Returns `true` while a task is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Adds a task titled `title` to the `status` column under a fresh
    /// identifier, returning the next state and the created task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when `title` is blank and
    /// [`BoardDomainError::DuplicateTask`] when the generated identifier is
    /// already taken.
    pub fn add_new_task(
        &self,
        title: &str,
        status: TaskStatus,
    ) -> Result<(Self, Task), BoardDomainError> {
        let (tasks, task) = self.tasks.with_new_task(title, status)?;
        let next = Self {
            tasks,
            drag: self.drag.clone(),
        };
        Ok((next, task))
    }

    /// Moves a task to `status`.
    #[must_use]
    pub fn change_task_status(&self, id: &TaskId, status: TaskStatus) -> Option<Self> {
        let tasks = self.tasks.with_status(id, status)?;
        Some(Self {
            tasks,
            drag: self.drag.clone(),
        })
    }

    /// Starts dragging `task_id`. No check is made that the task exists.
    #[must_use]
    pub fn start_drag(&self, task_id: TaskId) -> Option<Self> {
        if self.drag.task_id() == Some(&task_id) {
            return None;
        }
        Some(Self {
            tasks: self.tasks.clone(),
            drag: DragSession::start(task_id),
        })
    }

    /// Cancels the current drag.
    #[must_use]
    pub fn cancel_drag(&self) -> Option<Self> {
        if !self.drag.is_dragging() {
            return None;
        }
        Some(Self {
            tasks: self.tasks.clone(),
            drag: DragSession::Idle,
        })
    }

    /// Drops the dragged task onto the `status` column.
    ///
    /// The status change and the return to [`DragSession::Idle`] form one
    /// transition. A dangling drag reference only clears the session.
    #[must_use]
    pub fn drop_on(&self, status: TaskStatus) -> Option<Self> {
        let task_id = self.drag.task_id()?;
        let tasks = self
            .tasks
            .with_status(task_id, status)
            .unwrap_or_else(|| self.tasks.clone());
        Some(Self {
            tasks,
            drag: DragSession::Idle,
        })
    }
}
