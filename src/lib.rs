//! Taskboard: client-side state store for a kanban task board.
//!
//! This crate owns the board's task data, the drag-and-drop session, and the
//! persistence that keeps both across sessions.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and diagnostics
//! - **Adapters**: Concrete implementations of ports (local files, HTTP, memory)
//!
//! # Modules
//!
//! - [`board`]: Task repository, drag session, persistence and the store
//!   controller

pub mod board;
