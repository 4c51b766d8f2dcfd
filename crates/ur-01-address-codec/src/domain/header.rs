//! # Address Header Classification
//!
//! The top four bits of the first address byte select the address type;
//! for Shelley-era and reward addresses the low four bits are the network id.
//!
//! | Header nibble | Type |
//! |---------------|------|
//! | `0000`-`0011` | Base (payment + staking credential) |
//! | `0100`-`0101` | Pointer |
//! | `0110`-`0111` | Enterprise |
//! | `1000`        | Byron |
//! | `1110`-`1111` | Reward |
//!
//! Everything else is rejected.

use super::errors::AddressError;

/// Length of a Blake2b-224 credential hash.
pub const CREDENTIAL_HASH_LEN: usize = 28;

/// Header + payment hash + staking hash.
pub const BASE_ADDRESS_LEN: usize = 1 + 2 * CREDENTIAL_HASH_LEN;

/// Header + payment hash.
pub const ENTERPRISE_ADDRESS_LEN: usize = 1 + CREDENTIAL_HASH_LEN;

/// Header + staking hash.
pub const REWARD_ADDRESS_LEN: usize = 1 + CREDENTIAL_HASH_LEN;

/// Header + payment hash + three one-byte variable-length integers.
pub const POINTER_ADDRESS_MIN_LEN: usize = 1 + CREDENTIAL_HASH_LEN + 3;

/// Network id used by mainnet Shelley addresses.
pub const MAINNET_NETWORK_ID: u8 = 1;

/// Whether a credential is a key hash or a script hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    KeyHash,
    ScriptHash,
}

impl CredentialKind {
    fn from_bit(set: bool) -> Self {
        if set {
            CredentialKind::ScriptHash
        } else {
            CredentialKind::KeyHash
        }
    }
}

/// Address type as read from the header nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Base {
        payment: CredentialKind,
        stake: CredentialKind,
    },
    Pointer {
        payment: CredentialKind,
    },
    Enterprise {
        payment: CredentialKind,
    },
    Byron,
    Reward {
        stake: CredentialKind,
    },
}

impl AddressKind {
    pub fn name(&self) -> &'static str {
        match self {
            AddressKind::Base { .. } => "base",
            AddressKind::Pointer { .. } => "pointer",
            AddressKind::Enterprise { .. } => "enterprise",
            AddressKind::Byron => "byron",
            AddressKind::Reward { .. } => "reward",
        }
    }

    /// Map a header nibble to its address type.
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        let kind = match nibble {
            0b0000..=0b0011 => AddressKind::Base {
                payment: CredentialKind::from_bit(nibble & 0b0001 != 0),
                stake: CredentialKind::from_bit(nibble & 0b0010 != 0),
            },
            0b0100 | 0b0101 => AddressKind::Pointer {
                payment: CredentialKind::from_bit(nibble & 0b0001 != 0),
            },
            0b0110 | 0b0111 => AddressKind::Enterprise {
                payment: CredentialKind::from_bit(nibble & 0b0001 != 0),
            },
            0b1000 => AddressKind::Byron,
            0b1110 | 0b1111 => AddressKind::Reward {
                stake: CredentialKind::from_bit(nibble & 0b0001 != 0),
            },
            _ => return None,
        };

        Some(kind)
    }
}

/// A classified, length-checked view over raw address bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress<'a> {
    pub kind: AddressKind,
    /// Low header nibble. Meaningless for Byron addresses.
    pub network: u8,
    pub bytes: &'a [u8],
}

impl<'a> ParsedAddress<'a> {
    /// Classify `bytes` by header nibble and check the body length.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, AddressError> {
        let header = *bytes.first().ok_or(AddressError::Empty)?;
        let nibble = header >> 4;

        let kind = AddressKind::from_nibble(nibble).ok_or_else(|| AddressError::UnknownHeader {
            header_type: nibble,
            hex: hex::encode(bytes),
        })?;

        let exact = match kind {
            AddressKind::Base { .. } => Some(BASE_ADDRESS_LEN),
            AddressKind::Enterprise { .. } => Some(ENTERPRISE_ADDRESS_LEN),
            AddressKind::Reward { .. } => Some(REWARD_ADDRESS_LEN),
            AddressKind::Pointer { .. } | AddressKind::Byron => None,
        };

        if let Some(expected) = exact {
            if bytes.len() != expected {
                return Err(AddressError::InvalidLength {
                    kind: kind.name(),
                    expected,
                    actual: bytes.len(),
                    hex: hex::encode(bytes),
                });
            }
        }

        if matches!(kind, AddressKind::Pointer { .. }) && bytes.len() < POINTER_ADDRESS_MIN_LEN {
            return Err(AddressError::Truncated {
                kind: kind.name(),
                min: POINTER_ADDRESS_MIN_LEN,
                actual: bytes.len(),
                hex: hex::encode(bytes),
            });
        }

        Ok(Self {
            kind,
            network: header & 0x0F,
            bytes,
        })
    }

    pub fn is_mainnet(&self) -> bool {
        self.network == MAINNET_NETWORK_ID
    }
}

/// Assemble standalone reward address bytes from a staking credential.
pub fn reward_address_bytes(
    network: u8,
    kind: CredentialKind,
    credential: &[u8; CREDENTIAL_HASH_LEN],
) -> Vec<u8> {
    let type_nibble: u8 = match kind {
        CredentialKind::KeyHash => 0b1110,
        CredentialKind::ScriptHash => 0b1111,
    };

    let mut out = Vec::with_capacity(REWARD_ADDRESS_LEN);
    out.push((type_nibble << 4) | (network & 0x0F));
    out.extend_from_slice(credential);
    out
}
