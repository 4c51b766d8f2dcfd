//! # Ports Layer
//!
//! - `inbound`: the decoding API the block walker drives

pub mod inbound;

pub use inbound::*;
