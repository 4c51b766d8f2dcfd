//! # Inbound Ports (Driving Ports)

use crate::domain::{AddressCodec, AddressError, AddressMode, Decoded};

/// Maps raw output address bytes to balance keys.
///
/// Implementations must be pure: the same bytes always decode to the
/// same result, from any thread.
pub trait AddressDecoder: Send + Sync {
    fn mode(&self) -> AddressMode;

    fn decode(&self, address: &[u8]) -> Result<Decoded, AddressError>;
}

impl AddressDecoder for AddressCodec {
    fn mode(&self) -> AddressMode {
        AddressCodec::mode(self)
    }

    fn decode(&self, address: &[u8]) -> Result<Decoded, AddressError> {
        AddressCodec::decode(self, address)
    }
}
