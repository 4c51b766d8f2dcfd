//! # Domain Layer
//!
//! Pure address logic. No I/O, no shared state.
//!
//! - `header`: nibble classification and length checks
//! - `codec`: key derivation per mode
//! - `value_objects`: `AddressMode`, `DecodePolicy`, `BalanceKey`

pub mod codec;
pub mod errors;
pub mod header;
pub mod value_objects;

pub use codec::*;
pub use errors::*;
pub use header::*;
pub use value_objects::*;
