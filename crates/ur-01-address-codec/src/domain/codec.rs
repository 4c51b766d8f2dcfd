//! # Address Codec
//!
//! Turns raw output address bytes into a canonical [`BalanceKey`].
//!
//! | Kind | Payment mode | Stake mode |
//! |------|--------------|------------|
//! | Base | bech32 `addr` of the bytes | bech32 `stake` of the derived reward address |
//! | Pointer / Enterprise | bech32 `addr` of the bytes | Excluded |
//! | Byron | base58 of the bytes | Excluded |
//! | Reward | bech32 `stake` of the bytes | bech32 `stake` of the bytes |
//!
//! Non-mainnet network ids use the `_test` human-readable parts.
//! The codec is stateless and safe to share across threads.

use bech32::{ToBase32, Variant};

use super::errors::AddressError;
use super::header::{
    reward_address_bytes, AddressKind, CredentialKind, ParsedAddress, BASE_ADDRESS_LEN,
    CREDENTIAL_HASH_LEN, MAINNET_NETWORK_ID,
};
use super::value_objects::{AddressMode, BalanceKey, Decoded, ExclusionReason};

pub const HRP_ADDR_MAINNET: &str = "addr";
pub const HRP_ADDR_TESTNET: &str = "addr_test";
pub const HRP_STAKE_MAINNET: &str = "stake";
pub const HRP_STAKE_TESTNET: &str = "stake_test";

/// Address codec bound to one decode mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressCodec {
    mode: AddressMode,
}

impl AddressCodec {
    pub fn new(mode: AddressMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    /// Decode `bytes` under this codec's mode.
    pub fn decode(&self, bytes: &[u8]) -> Result<Decoded, AddressError> {
        decode(bytes, self.mode)
    }
}

/// Decode raw address bytes into a key, an exclusion, or an error.
pub fn decode(bytes: &[u8], mode: AddressMode) -> Result<Decoded, AddressError> {
    let parsed = ParsedAddress::parse(bytes)?;

    match (mode, parsed.kind) {
        (AddressMode::Payment, AddressKind::Byron) => Ok(Decoded::Key(encode_byron(bytes))),
        (AddressMode::Payment, AddressKind::Reward { .. }) => {
            encode_bech32(stake_hrp(&parsed), bytes).map(Decoded::Key)
        }
        (AddressMode::Payment, _) => encode_bech32(addr_hrp(&parsed), bytes).map(Decoded::Key),

        (AddressMode::Stake, AddressKind::Byron) => {
            Ok(Decoded::Excluded(ExclusionReason::Byron))
        }
        (AddressMode::Stake, AddressKind::Reward { .. }) => {
            encode_bech32(stake_hrp(&parsed), bytes).map(Decoded::Key)
        }
        (AddressMode::Stake, AddressKind::Base { stake, .. }) => {
            // parse() has pinned the length to BASE_ADDRESS_LEN
            let mut hash = [0u8; CREDENTIAL_HASH_LEN];
            hash.copy_from_slice(&bytes[1 + CREDENTIAL_HASH_LEN..BASE_ADDRESS_LEN]);
            stake_key(parsed.network, stake, &hash).map(Decoded::Key)
        }
        (AddressMode::Stake, AddressKind::Pointer { .. } | AddressKind::Enterprise { .. }) => {
            Ok(Decoded::Excluded(ExclusionReason::NoStakingCredential))
        }
    }
}

/// Reward-address key for a staking credential on `network`.
pub fn stake_key(
    network: u8,
    kind: CredentialKind,
    credential: &[u8; CREDENTIAL_HASH_LEN],
) -> Result<BalanceKey, AddressError> {
    let bytes = reward_address_bytes(network, kind, credential);
    let hrp = if network == MAINNET_NETWORK_ID {
        HRP_STAKE_MAINNET
    } else {
        HRP_STAKE_TESTNET
    };
    encode_bech32(hrp, &bytes)
}

fn addr_hrp(parsed: &ParsedAddress<'_>) -> &'static str {
    if parsed.is_mainnet() {
        HRP_ADDR_MAINNET
    } else {
        HRP_ADDR_TESTNET
    }
}

fn stake_hrp(parsed: &ParsedAddress<'_>) -> &'static str {
    if parsed.is_mainnet() {
        HRP_STAKE_MAINNET
    } else {
        HRP_STAKE_TESTNET
    }
}

fn encode_bech32(hrp: &str, bytes: &[u8]) -> Result<BalanceKey, AddressError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map(BalanceKey::new)
        .map_err(|e| AddressError::Encoding {
            hex: hex::encode(bytes),
            reason: e.to_string(),
        })
}

fn encode_byron(bytes: &[u8]) -> BalanceKey {
    BalanceKey::new(bs58::encode(bytes).into_string())
}
