//! # Core Chain Entities
//!
//! The block shape consumed by every reducer in the workspace.
//!
//! ## Clusters
//!
//! - **Chain position**: `Point`, `BlockHeader`
//! - **Ledger content**: `Block`, `Transaction`, `TxOutput`, `TxInput`
//!
//! Byte fields (addresses, hashes) travel as lowercase hex in JSON.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

// =============================================================================
// CLUSTER A: CHAIN POSITION
// =============================================================================

/// A 32-byte block or transaction hash.
pub type Hash = [u8; 32];

/// Lovelace-style amount carried by a single output.
pub type Coin = u64;

/// A position on the chain.
///
/// `Origin` is only ever used for resets to genesis; every real block
/// has a `Specific` point.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Point {
    Origin,
    Specific {
        slot: u64,
        #[serde_as(as = "Hex")]
        hash: Hash,
    },
}

impl Point {
    /// Slot of the point, zero for origin.
    pub fn slot_or_default(&self) -> u64 {
        match self {
            Point::Origin => 0,
            Point::Specific { slot, .. } => *slot,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Point::Origin => write!(f, "origin"),
            Point::Specific { slot, hash } => write!(f, "{}@{}", slot, hex::encode(&hash[..8])),
        }
    }
}

/// Header metadata the reducers need to frame their output.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Absolute slot of the block.
    pub slot: u64,
    /// Block hash.
    #[serde_as(as = "Hex")]
    pub hash: Hash,
    /// Block height in the chain.
    #[serde(default)]
    pub height: u64,
}

impl BlockHeader {
    pub fn point(&self) -> Point {
        Point::Specific {
            slot: self.slot,
            hash: self.hash,
        }
    }
}

// =============================================================================
// CLUSTER B: LEDGER CONTENT
// =============================================================================

/// An already-validated block, fed in chain order by the follower.
///
/// Transaction order is processing order only; no reducer result may
/// depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub header: BlockHeader,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    pub fn point(&self) -> Point {
        self.header.point()
    }
}

/// A transaction: the outputs it creates and the inputs it spends.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transaction {
    #[serde_as(as = "Hex")]
    #[serde(default)]
    pub hash: Hash,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
}

/// An output as it was created on chain. Immutable once created.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Raw address bytes, header byte first.
    #[serde_as(as = "Hex")]
    pub address: Vec<u8>,
    pub coin: Coin,
}

impl TxOutput {
    pub fn new(address: impl Into<Vec<u8>>, coin: Coin) -> Self {
        Self {
            address: address.into(),
            coin,
        }
    }
}

/// A reference to a previously produced output.
///
/// `as_output` carries the spent output when the follower resolved it.
/// Unresolved inputs cannot contribute to any balance.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    #[serde_as(as = "Hex")]
    pub tx_hash: Hash,
    pub index: u32,
    #[serde(default, alias = "asOutput")]
    pub as_output: Option<TxOutput>,
}

impl TxInput {
    /// An input whose spent output was embedded by the follower.
    pub fn resolved(tx_hash: Hash, index: u32, output: TxOutput) -> Self {
        Self {
            tx_hash,
            index,
            as_output: Some(output),
        }
    }

    /// A bare reference with no resolved output.
    pub fn unresolved(tx_hash: Hash, index: u32) -> Self {
        Self {
            tx_hash,
            index,
            as_output: None,
        }
    }
}
