//! Inbound (Driving) ports for the balance reducer.

use shared_types::Block;

use crate::domain::{Reduction, ReduceError};

/// Block reduction API exposed to the pipeline stage.
///
/// Both operations are pure with respect to `block`: the same block and
/// configuration always produce the same commands in the same order.
pub trait BalanceReducerApi: Send + Sync {
    /// Commands for a block that joined the chain.
    fn apply(&self, block: &Block) -> Result<Reduction, ReduceError>;

    /// Commands that exactly cancel a prior `apply` of the same block.
    fn undo(&self, block: &Block) -> Result<Reduction, ReduceError>;
}
