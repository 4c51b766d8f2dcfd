//! Domain layer for the reduce pipeline.

pub mod composer;
pub mod config;
pub mod errors;
pub mod events;

pub use composer::*;
pub use config::*;
pub use errors::*;
pub use events::*;
