//! Application services for board state orchestration.

mod config;
mod store;
mod writer;

pub use config::StoreConfig;
pub use store::{BoardStoreError, BoardStoreResult, StoreController};
