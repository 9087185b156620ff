//! Domain model for the task board.
//!
//! The board domain models tasks, their status columns, the drag session and
//! the persisted snapshot format while keeping all I/O outside of the domain
//! boundary.

mod action;
mod drag;
mod error;
mod ids;
mod repository;
mod snapshot;
mod state;
mod task;

pub use action::{ActionOutcome, StoreAction};
pub use drag::DragSession;
pub use error::{BoardDomainError, ParseTaskStatusError, SnapshotError};
pub use ids::{SnapshotName, TaskId};
pub use repository::TaskRepository;
pub use snapshot::{BoardSnapshot, SnapshotEnvelope};
pub use state::BoardState;
pub use task::{Task, TaskStatus, TaskTitle};
