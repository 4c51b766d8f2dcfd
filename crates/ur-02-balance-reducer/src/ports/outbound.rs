//! Outbound (Driven) ports for the balance reducer.

use shared_types::Command;

use crate::domain::BalanceDeltas;

/// Renders finalized deltas in the shape one storage backend understands.
pub trait CommandEmitter: Send + Sync {
    /// Commands for `deltas`, in ascending key order where the backend
    /// emits one command per key.
    fn emit(&self, deltas: &BalanceDeltas) -> Vec<Command>;

    /// Short backend label for logs and metrics.
    fn backend_name(&self) -> &'static str;
}
