//! Store controller composing the board state, persistence and diagnostics.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio::sync::watch;

use super::{StoreConfig, writer::SnapshotWriter};
use crate::board::{
    adapters::TracingActionObserver,
    domain::{
        ActionOutcome, BoardDomainError, BoardSnapshot, BoardState, DragSession,
        SnapshotEnvelope, StoreAction, Task, TaskId, TaskStatus,
    },
    ports::{ActionObserver, PersistenceAdapter},
};

/// Errors returned by store controller operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// Input validation failed before any state change.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Result type for store controller operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Observable owner of the board state.
///
/// Every operation derives a new [`BoardState`] from the current one and
/// publishes it through a watch channel, so subscribers only ever see
/// complete states. Changes are then queued for persistence; storage
/// failures are logged and never undo the in-memory change.
///
/// The controller may be shared between threads. Commits are serialized,
/// so snapshots are queued in the same order their states are published.
#[derive(Debug)]
pub struct StoreController<O = TracingActionObserver>
where
    O: ActionObserver,
{
    config: StoreConfig,
    observer: Arc<O>,
    state: watch::Sender<BoardState>,
    commits: Mutex<()>,
    writer: SnapshotWriter,
}

impl<O> StoreController<O>
where
    O: ActionObserver,
{
    /// Creates a controller, rehydrating from `persistence` when a usable
    /// snapshot exists and falling back to the configured seed otherwise.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn init<P>(persistence: Arc<P>, observer: Arc<O>, config: StoreConfig) -> Self
    where
        P: PersistenceAdapter + 'static,
    {
        let (initial, outcome) = match rehydrate(persistence.as_ref(), &config).await {
            Some(state) => (state, ActionOutcome::Applied),
            None => (
                BoardState::new(config.seed().clone(), DragSession::Idle),
                ActionOutcome::Ignored,
            ),
        };
        observer.record(&StoreAction::Rehydrate, outcome);

        let writer = SnapshotWriter::spawn(persistence, config.name().clone());
        let (state, _) = watch::channel(initial);
        Self {
            config,
            observer,
            state,
            commits: Mutex::new(()),
            writer,
        }
    }

    /// Returns the controller configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver yields once per applied change; calls that change
    /// nothing do not notify. Receivers close when the controller shuts down.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Returns every task in `status`, in insertion order.
    #[must_use]
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.state.borrow().tasks().by_status(status)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.state.borrow().tasks().get(id).cloned()
    }

    /// Returns `true` while a task is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    /// Returns the identifier of the dragged task, if any.
    #[must_use]
    pub fn dragging_task_id(&self) -> Option<TaskId> {
        self.state.borrow().drag().task_id().cloned()
    }

    /// Adds a task with a fresh identifier to the `status` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Domain`] with
    /// [`BoardDomainError::EmptyTaskTitle`] when `title` is blank. Nothing
    /// changes and nothing is persisted in that case, and the call is
    /// recorded as [`ActionOutcome::Rejected`].
    pub fn add_task(&self, title: &str, status: TaskStatus) -> BoardStoreResult<Task> {
        let action = StoreAction::AddTask { status };
        match self.apply(&action, |state| state.add_new_task(title, status)) {
            Ok(task) => {
                self.observer.record(&action, ActionOutcome::Applied);
                Ok(task)
            }
            Err(err) => {
                self.observer.record(&action, ActionOutcome::Rejected);
                Err(err.into())
            }
        }
    }

    /// Moves task `id` to `status`. Unknown identifiers are ignored.
    pub fn change_task_status(&self, id: &TaskId, status: TaskStatus) {
        let action = StoreAction::ChangeTaskStatus {
            task_id: id.clone(),
            status,
        };
        self.commit(&action, |state| state.change_task_status(id, status));
    }

    /// Starts dragging `task_id`. The task is not required to exist.
    pub fn set_dragging_task_id(&self, task_id: TaskId) {
        let action = StoreAction::SetDraggingTaskId {
            task_id: task_id.clone(),
        };
        self.commit(&action, |state| state.start_drag(task_id));
    }

    /// Cancels the current drag, if any.
    pub fn remove_dragging_task_id(&self) {
        self.commit(&StoreAction::RemoveDraggingTaskId, BoardState::cancel_drag);
    }

    /// Drops the dragged task onto the `status` column and ends the drag.
    ///
    /// Does nothing when no drag is in progress. The status change and the
    /// end of the drag are published as one state change.
    pub fn on_task_drop(&self, status: TaskStatus) {
        self.commit(&StoreAction::TaskDrop { status }, |state| state.drop_on(status));
    }

    /// Waits until every snapshot queued so far has been written (or has
    /// failed).
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Writes pending snapshots, stops the writer and closes all
    /// subscriptions.
    pub async fn shutdown(self) {
        let Self { state, writer, .. } = self;
        writer.shutdown().await;
        drop(state);
    }

    /// Applies `transition`, recording the call as applied or ignored.
    fn commit<F>(&self, action: &StoreAction, transition: F)
    where
        F: FnOnce(&BoardState) -> Option<BoardState>,
    {
        let applied = self.apply(action, |state| {
            transition(state).map(|next| (next, ())).ok_or(())
        });
        let outcome = if applied.is_ok() {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        };
        self.observer.record(action, outcome);
    }

    /// Publishes the state produced by `transition` and queues its snapshot.
    ///
    /// Holds the commit lock from reading the current state until the
    /// snapshot is queued. A task-preserving change is only persisted when
    /// drag sessions are.
    fn apply<T, E, F>(&self, action: &StoreAction, transition: F) -> Result<T, E>
    where
        F: FnOnce(&BoardState) -> Result<(BoardState, T), E>,
    {
        let _commit = self.commits.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, output, tasks_changed) = {
            let current = self.state.borrow();
            let (next, output) = transition(&current)?;
            let tasks_changed = next.tasks() != current.tasks();
            (next, output, tasks_changed)
        };

        if tasks_changed || self.config.persist_drag_session() {
            self.persist(action, &next);
        }
        self.state.send_replace(next);
        Ok(output)
    }

    fn persist(&self, action: &StoreAction, state: &BoardState) {
        let envelope = SnapshotEnvelope::new(
            BoardSnapshot::capture(state, self.config.persist_drag_session()),
            self.config.snapshot_version(),
        );
        match envelope.encode() {
            Ok(encoded) => self.writer.enqueue(encoded),
            Err(err) => tracing::warn!(
                store = %self.config.name(),
                action = action.name(),
                error = %err,
                "snapshot encoding failed; change not persisted"
            ),
        }
    }
}

async fn rehydrate<P>(persistence: &P, config: &StoreConfig) -> Option<BoardState>
where
    P: PersistenceAdapter + ?Sized,
{
    let name = config.name();
    let raw = match persistence.load(name).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!(store = %name, "no persisted snapshot; using seed tasks");
            return None;
        }
        Err(err) => {
            tracing::warn!(store = %name, error = %err, "snapshot load failed; using seed tasks");
            return None;
        }
    };

    match SnapshotEnvelope::decode(&raw, config.snapshot_version()) {
        Ok(snapshot) => {
            let state = snapshot.into_state(config.persist_drag_session());
            tracing::info!(store = %name, tasks = state.tasks().len(), "rehydrated board state");
            Some(state)
        }
        Err(err) => {
            tracing::warn!(store = %name, error = %err, "persisted snapshot unusable; using seed tasks");
            None
        }
    }
}
