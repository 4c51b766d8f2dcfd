//! # Value Objects
//!
//! Decode modes, the error policy and the canonical key type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which balance-holding entity an address is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressMode {
    /// Key by the full address (bech32 `addr`, base58 for Byron).
    #[default]
    Payment,
    /// Key by the reward address derived from the staking credential.
    Stake,
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressMode::Payment => write!(f, "payment"),
            AddressMode::Stake => write!(f, "stake"),
        }
    }
}

/// What a reducer instance does with undecodable address bytes.
///
/// Fixed per instance; never varies between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DecodePolicy {
    /// Abort the whole block reduction. No commands are emitted.
    #[default]
    #[serde(rename = "abort")]
    Strict,
    /// Log, count, and leave the output out of the reduction.
    #[serde(rename = "skip")]
    Lenient,
}

/// Canonical string identity of a balance holder.
///
/// Two keys are the same holder exactly when their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceKey(String);

impl BalanceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BalanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BalanceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why an address carries no key under the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// Byron addresses have no staking credential.
    Byron,
    /// Enterprise and pointer addresses carry no embedded staking credential.
    NoStakingCredential,
    /// Undecodable bytes under the lenient policy.
    Undecodable,
}

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Key(BalanceKey),
    /// Not an error: the output does not take part in this reduction.
    Excluded(ExclusionReason),
}

impl Decoded {
    pub fn key(&self) -> Option<&BalanceKey> {
        match self {
            Decoded::Key(k) => Some(k),
            Decoded::Excluded(_) => None,
        }
    }
}
