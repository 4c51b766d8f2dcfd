//! CRDT counter backend: one `PNCounter` command per touched key.

use shared_types::Command;

use crate::domain::BalanceDeltas;
use crate::ports::CommandEmitter;

/// Emits `PNCounter` commands, keys optionally namespaced as `prefix.key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrdtEmitter {
    prefix: Option<String>,
}

impl CrdtEmitter {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl CommandEmitter for CrdtEmitter {
    fn emit(&self, deltas: &BalanceDeltas) -> Vec<Command> {
        deltas
            .iter()
            .map(|(key, value)| Command::pn_counter(self.prefix(), key.as_str(), *value))
            .collect()
    }

    fn backend_name(&self) -> &'static str {
        "crdt"
    }
}
