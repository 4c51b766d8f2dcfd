//! # UTxO Reducers Test Suite
//!
//! Cross-crate tests and benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs          # Address and block builders
//! │   └── integration/
//! │       ├── end_to_end.rs    # One block, one reducer
//! │       ├── reorg.rs         # Apply/undo replays through the stage
//! │       └── composition.rs   # Several instances from one config
//! └── benches/
//!     └── reduce_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ur-tests
//! cargo test -p ur-tests integration::reorg
//! cargo bench -p ur-tests
//! ```

pub mod fixtures;
pub mod integration;
