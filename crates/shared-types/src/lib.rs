//! # Shared Types Crate
//!
//! Block and command types shared by every reducer crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The block model the follower feeds in and
//!   the command model the storage stage consumes are defined only here.
//! - **Plain Values**: Everything is `Clone + Serialize`; no type in this
//!   crate performs I/O.

pub mod commands;
pub mod entities;

pub use commands::*;
pub use entities::*;
