//! # Domain Entities for Balance Reduction
//!
//! ## Type Decisions
//!
//! - `Delta = i128`: every coin is a `u64`, so a block would need more than
//!   2^63 maximal outputs on one key to overflow. Additions are still
//!   checked and surface as `ReduceError::DeltaOverflow` instead of wrapping.

use serde::{Deserialize, Serialize};
use shared_types::{Command, Delta};
use std::collections::btree_map;
use std::collections::BTreeMap;
use ur_01_address_codec::BalanceKey;

/// Which way a block is being reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The block joined the chain.
    Apply,
    /// The block was rolled back.
    Undo,
}

impl Direction {
    /// Sign applied to newly created outputs.
    ///
    /// | Source | Apply | Undo |
    /// |--------|-------|------|
    /// | Output | + | - |
    /// | Resolved input | - | + |
    pub fn output_sign(self) -> Delta {
        match self {
            Direction::Apply => 1,
            Direction::Undo => -1,
        }
    }

    /// Sign applied to spent outputs embedded in resolved inputs.
    pub fn input_sign(self) -> Delta {
        -self.output_sign()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Apply => "apply",
            Direction::Undo => "undo",
        }
    }
}

/// Finalized per-key deltas of one block reduction.
///
/// Ordered by key so that emission is deterministic. Entries that net
/// to zero are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceDeltas(BTreeMap<BalanceKey, Delta>);

impl BalanceDeltas {
    pub(crate) fn from_map(map: BTreeMap<BalanceKey, Delta>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<Delta> {
        self.0.get(&BalanceKey::new(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, BalanceKey, Delta> {
        self.0.iter()
    }

}

impl<'a> IntoIterator for &'a BalanceDeltas {
    type Item = (&'a BalanceKey, &'a Delta);
    type IntoIter = btree_map::Iter<'a, BalanceKey, Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Counters describing what one reduction saw.
///
/// `unresolved_inputs` is the operator-facing signal that the follower's
/// input resolution is incomplete: each one is a spend this reduction
/// could not reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReductionStats {
    pub outputs_seen: u64,
    pub resolved_inputs: u64,
    pub unresolved_inputs: u64,
    /// Outputs that carry no key under the active mode.
    pub excluded: u64,
    /// Undecodable addresses skipped under the lenient policy.
    pub decode_failures: u64,
    pub keys_touched: u64,
}

impl ReductionStats {
    /// Field-wise sum, used when several reducers process one block.
    pub fn merge(&mut self, other: &ReductionStats) {
        self.outputs_seen += other.outputs_seen;
        self.resolved_inputs += other.resolved_inputs;
        self.unresolved_inputs += other.unresolved_inputs;
        self.excluded += other.excluded;
        self.decode_failures += other.decode_failures;
        self.keys_touched += other.keys_touched;
    }
}

/// Output of reducing one block with one reducer instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reduction {
    pub commands: Vec<Command>,
    pub stats: ReductionStats,
}
