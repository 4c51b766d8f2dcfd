use thiserror::Error;
use ur_01_address_codec::AddressError;

/// Failure of one block reduction. No partial command list accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    #[error("address decode failed in tx {tx_hash}: {source}")]
    AddressDecode {
        tx_hash: String,
        #[source]
        source: AddressError,
    },

    #[error("balance delta overflow for key {key}")]
    DeltaOverflow { key: String },

    #[error("invalid reducer configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected reducer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("prefix and table are mutually exclusive")]
    PrefixAndTable,

    #[error("prefix must not be empty")]
    EmptyPrefix,

    #[error("invalid table name {name:?}: {reason}")]
    InvalidTable { name: String, reason: &'static str },
}
