use thiserror::Error;

/// Raised when address bytes cannot be turned into a key.
///
/// Every variant carries the hex dump of the offending bytes so the
/// failure can be traced back to the on-chain output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address \"\" could not be parsed: empty byte string")]
    Empty,

    #[error("address \"{hex}\" could not be parsed: unknown header type {header_type:#06b}")]
    UnknownHeader { header_type: u8, hex: String },

    #[error("address \"{hex}\" could not be parsed: {kind} address must be {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
        hex: String,
    },

    #[error("address \"{hex}\" could not be parsed: {kind} address needs at least {min} bytes, got {actual}")]
    Truncated {
        kind: &'static str,
        min: usize,
        actual: usize,
        hex: String,
    },

    #[error("address \"{hex}\" could not be encoded: {reason}")]
    Encoding { hex: String, reason: String },
}

impl AddressError {
    /// Hex dump of the bytes that failed to decode.
    pub fn hex(&self) -> &str {
        match self {
            AddressError::Empty => "",
            AddressError::UnknownHeader { hex, .. }
            | AddressError::InvalidLength { hex, .. }
            | AddressError::Truncated { hex, .. }
            | AddressError::Encoding { hex, .. } => hex,
        }
    }
}
