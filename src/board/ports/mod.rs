//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by the store
//! controller.

pub mod observer;
pub mod persistence;

pub use observer::ActionObserver;
pub use persistence::{PersistenceAdapter, PersistenceError, PersistenceResult};
