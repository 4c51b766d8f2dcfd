//! # Reduce Pipeline (ur-03)
//!
//! Runs a configured set of balance reducers over the chain follower's
//! events and frames their commands for the storage collaborator.
//!
//! ## Flow
//!
//! ```text
//! [Chain follower] ──ChainEvent──→ [ReduceStage] ──StorageEvent──→ [Storage]
//!                                       │
//!                                 [ReducerComposer]
//!                              ┌────────┼────────┐
//!                              ↓        ↓        ↓
//!                         reducer A  reducer B  reducer C
//! ```
//!
//! The storage collaborator maps `BlockStarting`/`BlockFinished` to a
//! transaction, so a block's commands commit atomically.

pub mod domain;
pub mod service;

pub use domain::*;
pub use service::ReduceStage;
