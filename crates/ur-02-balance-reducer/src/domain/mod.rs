//! Domain layer for the balance reducer.

pub mod accumulator;
pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod walker;

pub use accumulator::DeltaAccumulator;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
pub use walker::BlockWalker;
