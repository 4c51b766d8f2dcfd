//! # Delta Accumulator
//!
//! Block-scoped map from key to signed delta. Only ever changed by
//! [`DeltaAccumulator::merge`], which is plain addition, so any order of
//! merges yields the same finalized map.

use shared_types::Delta;
use std::collections::BTreeMap;
use ur_01_address_codec::BalanceKey;

use super::entities::BalanceDeltas;
use super::errors::ReduceError;

#[derive(Debug, Default)]
pub struct DeltaAccumulator {
    deltas: BTreeMap<BalanceKey, Delta>,
}

impl DeltaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the entry for `key`, starting from zero.
    pub fn merge(&mut self, key: BalanceKey, amount: Delta) -> Result<(), ReduceError> {
        let current = self.deltas.get(&key).copied().unwrap_or(0);
        let sum = current
            .checked_add(amount)
            .ok_or_else(|| ReduceError::DeltaOverflow {
                key: key.to_string(),
            })?;

        self.deltas.insert(key, sum);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Consume the accumulator. Zero-netting entries are retained.
    pub fn finalize(self) -> BalanceDeltas {
        BalanceDeltas::from_map(self.deltas)
    }
}
