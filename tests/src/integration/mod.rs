//! Cross-crate flows: codec → reducer → pipeline stage.

pub mod composition;
pub mod reorg;
