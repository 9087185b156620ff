//! Adapter implementations for board ports.

pub mod local;
pub mod memory;
pub mod remote;
pub mod tracing_observer;

pub use local::LocalFilePersistence;
pub use memory::{InMemoryActionLog, InMemoryPersistence};
pub use remote::{RemotePersistence, RemotePersistenceConfig};
pub use tracing_observer::TracingActionObserver;
