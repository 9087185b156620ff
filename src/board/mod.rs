//! Task board state management.
//!
//! This module holds the kanban board state store: the task repository and
//! its status queries, the drag-and-drop session state machine, and the
//! pluggable persistence that serializes and rehydrates board state. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
