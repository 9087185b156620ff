//! Diagnostic hook for store actions.

use crate::board::domain::{ActionOutcome, StoreAction};

/// Receives a labelled record of every store operation.
///
/// Observers exist for inspection tooling only and must not influence store
/// behaviour.
pub trait ActionObserver: Send + Sync {
    /// Records that `action` finished with `outcome`.
    fn record(&self, action: &StoreAction, outcome: ActionOutcome);
}
