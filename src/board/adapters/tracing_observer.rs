//! Action observer that emits `tracing` events.

use crate::board::{
    domain::{ActionOutcome, StoreAction},
    ports::ActionObserver,
};

/// Logs every store action as a structured debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActionObserver;

impl ActionObserver for TracingActionObserver {
    fn record(&self, action: &StoreAction, outcome: ActionOutcome) {
        tracing::debug!(action = action.name(), %outcome, detail = ?action, "store action");
    }
}
