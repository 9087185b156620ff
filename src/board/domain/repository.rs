//! Insertion-ordered task collection with copy-on-write updates.

use super::{BoardDomainError, Task, TaskId, TaskStatus, TaskTitle};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keyed collection of tasks in insertion order.
///
/// Updates never patch the collection in place: every mutation returns a new
/// repository derived from the current one, so a reader holding a repository
/// never observes a half-applied change. Status queries scan the whole map,
/// which keeps status changes a single keyed replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<TaskId, Task>",
    into = "IndexMap<TaskId, Task>"
)]
pub struct TaskRepository {
    tasks: IndexMap<TaskId, Task>,
}

impl TaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default board seeded with four sample tasks.
    #[must_use]
    pub fn seeded() -> Self {
        let seed = [
            ("ABC-1", TaskStatus::Open),
            ("ABC-2", TaskStatus::InProgress),
            ("ABC-3", TaskStatus::Open),
            ("ABC-4", TaskStatus::Open),
        ];
        let tasks = seed
            .into_iter()
            .map(|(label, status)| {
                let task = Task::with_id(
                    TaskId::from_static(label),
                    TaskTitle::from_static(label),
                    status,
                );
                (task.id().clone(), task)
            })
            .collect();
        Self { tasks }
    }

    /// Builds a repository from tasks, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, BoardDomainError> {
        let mut map = IndexMap::new();
        for task in tasks {
            let id = task.id().clone();
            if map.contains_key(&id) {
                return Err(BoardDomainError::DuplicateTask(id));
            }
            map.insert(id, task);
        }
        Ok(Self { tasks: map })
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the repository holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Returns every task in `status`, in insertion order.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }

    /// Returns a repository with `task` appended.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier is already present.
    pub fn with_task(&self, task: Task) -> Result<Self, BoardDomainError> {
        if self.tasks.contains_key(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        let mut tasks = self.tasks.clone();
        tasks.insert(task.id().clone(), task);
        Ok(Self { tasks })
    }

    /// Returns a repository with a new task, under a fresh identifier,
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when `title` is empty or
    /// whitespace-only; the repository is left untouched.
    pub fn with_new_task(
        &self,
        title: &str,
        status: TaskStatus,
    ) -> Result<(Self, Task), BoardDomainError> {
        let task = Task::new(TaskTitle::new(title)?, status);
        let tasks = self.with_task(task.clone())?;
        Ok((tasks, task))
    }

    /// Returns a repository where task `id` has moved to `status`.
    ///
    /// Returns `None` when the task does not exist or already has `status`.
    /// Missing tasks are expected: drag sessions may reference tasks that are
    /// gone.
    #[must_use]
    pub fn with_status(&self, id: &TaskId, status: TaskStatus) -> Option<Self> {
        let current = self.tasks.get(id)?;
        if current.status() == status {
            return None;
        }
        let moved = current.moved_to(status);
        let mut tasks = self.tasks.clone();
        tasks.insert(id.clone(), moved);
        Some(Self { tasks })
    }
}

impl TryFrom<IndexMap<TaskId, Task>> for TaskRepository {
    type Error = BoardDomainError;

    fn try_from(tasks: IndexMap<TaskId, Task>) -> Result<Self, Self::Error> {
        if let Some((key, task)) = tasks.iter().find(|(key, task)| *key != task.id()) {
            return Err(BoardDomainError::MismatchedTaskKey {
                key: key.clone(),
                id: task.id().clone(),
            });
        }
        Ok(Self { tasks })
    }
}

impl From<TaskRepository> for IndexMap<TaskId, Task> {
    fn from(value: TaskRepository) -> Self {
        value.tasks
    }
}
