//! Background snapshot writer.
//!
//! Saves are queued on an unbounded channel and executed one at a time by a
//! single task, so snapshots from one controller reach storage in the order
//! they were produced. Nothing cancels a save once queued.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::board::{domain::SnapshotName, ports::PersistenceAdapter};

enum WriteCommand {
    Save(String),
    Flush(oneshot::Sender<()>),
}

impl std::fmt::Debug for WriteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Save(value) => write!(f, "Save({} bytes)", value.len()),
            Self::Flush(_) => f.write_str("Flush"),
        }
    }
}

/// Handle to the writer task.
#[derive(Debug)]
pub(super) struct SnapshotWriter {
    commands: mpsc::UnboundedSender<WriteCommand>,
    worker: JoinHandle<()>,
}

impl SnapshotWriter {
    /// Spawns the writer task on the current tokio runtime.
    pub(super) fn spawn<P>(persistence: Arc<P>, name: SnapshotName) -> Self
    where
        P: PersistenceAdapter + 'static,
    {
        let (commands, receiver) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run(persistence, name, receiver));
        Self { commands, worker }
    }

    /// Queues `value` for saving without waiting for it.
    pub(super) fn enqueue(&self, value: String) {
        if self.commands.send(WriteCommand::Save(value)).is_err() {
            tracing::warn!("snapshot writer has stopped; save dropped");
        }
    }

    /// Waits until every save queued before this call has finished.
    pub(super) async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.commands.send(WriteCommand::Flush(ack)).is_err() {
            return;
        }
        if done.await.is_err() {
            tracing::warn!("snapshot writer stopped before flush completed");
        }
    }

    /// Drains queued saves and stops the writer task.
    pub(super) async fn shutdown(self) {
        drop(self.commands);
        if let Err(err) = self.worker.await {
            tracing::warn!(error = %err, "snapshot writer terminated abnormally");
        }
    }
}

async fn run<P>(
    persistence: Arc<P>,
    name: SnapshotName,
    mut receiver: mpsc::UnboundedReceiver<WriteCommand>,
) where
    P: PersistenceAdapter + 'static,
{
    while let Some(command) = receiver.recv().await {
        match command {
            WriteCommand::Save(value) => match persistence.save(&name, &value).await {
                Ok(()) => tracing::debug!(store = %name, bytes = value.len(), "snapshot saved"),
                Err(err) => tracing::warn!(
                    store = %name,
                    error = %err,
                    "snapshot save failed; in-memory state kept"
                ),
            },
            WriteCommand::Flush(ack) => {
                if ack.send(()).is_err() {
                    tracing::debug!(store = %name, "flush waiter went away");
                }
            }
        }
    }
}
