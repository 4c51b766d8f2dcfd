//! # Balance Reducer (ur-02)
//!
//! Turns one block into the storage commands that move per-key balances
//! by that block's net effect.
//!
//! ## Reduction
//!
//! Every output adds its coin under its key; every resolved input
//! subtracts the coin of the output it spends. Undo flips both signs, so
//! `undo(b)` cancels `apply(b)` key by key.
//!
//! | Source | Apply | Undo |
//! |--------|-------|------|
//! | Output | `+coin` | `-coin` |
//! | Resolved input | `-coin` | `+coin` |
//! | Unresolved input | skipped, counted | skipped, counted |
//!
//! Contributions are summed per key in a block-scoped accumulator before
//! anything is emitted. Keys whose contributions net to zero are still
//! emitted.
//!
//! ## Backends
//!
//! | Config | Commands |
//! |--------|----------|
//! | no `table` | one `PNCounter` per key, key `prefix.key` when `prefix` is set |
//! | `table` | one bound UPSERT of all keys, then a DELETE of zero rows |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): walker, accumulator, configuration
//! - **Ports Layer** (`ports/`): `BalanceReducerApi`, `CommandEmitter`
//! - **Adapters Layer** (`adapters/`): CRDT and relational emitters
//! - **Service** (`service.rs`): `BalanceReducer` wiring them together

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{CrdtEmitter, EmitterBackend, RelationalEmitter};
pub use domain::*;
pub use ports::{BalanceReducerApi, CommandEmitter};
pub use service::{apply, undo, BalanceReducer};
