//! # Address Codec (ur-01)
//!
//! Decodes raw ledger address bytes into the canonical string key a
//! balance is tracked under.
//!
//! ## Modes
//!
//! - **Payment**: every decodable address is its own key. Shelley-era
//!   addresses render as bech32 (`addr`/`addr_test`), Byron addresses as
//!   base58, reward addresses as bech32 `stake`.
//! - **Stake**: only addresses carrying a staking credential take part.
//!   Base addresses are re-keyed by the reward address of their staking
//!   credential; reward addresses are their own key; everything else is
//!   `Excluded`.
//!
//! ## Outcomes
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Decoded::Key` | merge the coin under this key |
//! | `Decoded::Excluded` | the output does not participate; never a zero delta |
//! | `AddressError` | unrecognised or malformed bytes, with hex dump |
//!
//! How an `AddressError` affects a block is decided by the reducer
//! instance's [`DecodePolicy`].
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): header parsing and key derivation
//! - **Ports Layer** (`ports/`): `AddressDecoder` trait used by walkers

pub mod domain;
pub mod ports;

pub use domain::{
    decode, stake_key, AddressCodec, AddressError, AddressKind, AddressMode, BalanceKey,
    CredentialKind, DecodePolicy, Decoded, ExclusionReason, ParsedAddress, CREDENTIAL_HASH_LEN,
};
pub use ports::AddressDecoder;
