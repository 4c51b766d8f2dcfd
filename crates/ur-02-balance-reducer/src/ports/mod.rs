//! Ports layer for the balance reducer.
//!
//! - Inbound (Driving) ports: how the pipeline asks for a reduction
//! - Outbound (Driven) ports: how finalized deltas become storage commands

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
