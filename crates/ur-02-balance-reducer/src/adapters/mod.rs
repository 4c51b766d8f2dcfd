//! Storage backend adapters.

pub mod crdt;
pub mod relational;

pub use crdt::CrdtEmitter;
pub use relational::RelationalEmitter;

use shared_types::Command;

use crate::domain::{Backend, BalanceDeltas};
use crate::ports::CommandEmitter;

/// The emitter a reducer instance was configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitterBackend {
    Crdt(CrdtEmitter),
    Relational(RelationalEmitter),
}

impl From<Backend> for EmitterBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Crdt { prefix } => EmitterBackend::Crdt(CrdtEmitter::new(prefix)),
            Backend::Relational { table } => {
                EmitterBackend::Relational(RelationalEmitter::new(table))
            }
        }
    }
}

impl CommandEmitter for EmitterBackend {
    fn emit(&self, deltas: &BalanceDeltas) -> Vec<Command> {
        match self {
            EmitterBackend::Crdt(e) => e.emit(deltas),
            EmitterBackend::Relational(e) => e.emit(deltas),
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            EmitterBackend::Crdt(e) => e.backend_name(),
            EmitterBackend::Relational(e) => e.backend_name(),
        }
    }
}
