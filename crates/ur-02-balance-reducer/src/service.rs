//! # Balance Reducer Service
//!
//! One configured reducer instance. Each call walks the block into a fresh
//! accumulator, so instances hold no per-block state and can be shared
//! across threads.

use shared_types::{Block, Command};
use tracing::{debug, instrument, warn};
use ur_01_address_codec::AddressCodec;

use crate::adapters::EmitterBackend;
use crate::domain::{
    BalanceDeltas, BlockWalker, ConfigError, DeltaAccumulator, Direction, ReduceError,
    Reduction, ReducerConfig, ReductionStats,
};
use crate::ports::{BalanceReducerApi, CommandEmitter};

/// A validated reducer instance.
#[derive(Debug, Clone)]
pub struct BalanceReducer {
    config: ReducerConfig,
    codec: AddressCodec,
    emitter: EmitterBackend,
}

impl BalanceReducer {
    /// Validate `config` and bind its codec and backend.
    pub fn new(config: ReducerConfig) -> Result<Self, ConfigError> {
        let emitter = EmitterBackend::from(config.backend()?);
        let codec = AddressCodec::new(config.address_type);

        Ok(Self {
            config,
            codec,
            emitter,
        })
    }

    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &'static str {
        self.emitter.backend_name()
    }

    /// Finalized per-key deltas of `block` in `direction`.
    pub fn deltas(
        &self,
        block: &Block,
        direction: Direction,
    ) -> Result<(BalanceDeltas, ReductionStats), ReduceError> {
        let mut acc = DeltaAccumulator::new();
        let stats = BlockWalker::new(&self.codec, self.config.on_decode_error)
            .walk(block, direction, &mut acc)?;
        Ok((acc.finalize(), stats))
    }

    /// Walk `block` and render its deltas as storage commands.
    #[instrument(skip(self, block, direction), fields(slot = block.header.slot, direction = direction.as_str()))]
    pub fn reduce(&self, block: &Block, direction: Direction) -> Result<Reduction, ReduceError> {
        let (deltas, stats) = self.deltas(block, direction)?;
        let commands = self.emitter.emit(&deltas);

        debug!(
            mode = %self.config.address_type,
            backend = self.emitter.backend_name(),
            keys = deltas.len(),
            commands = commands.len(),
            unresolved_inputs = stats.unresolved_inputs,
            "[ur-02] Block reduced"
        );

        if stats.unresolved_inputs > 0 {
            warn!(
                unresolved_inputs = stats.unresolved_inputs,
                "[ur-02] Block has unresolved inputs; spent coins not reflected"
            );
        }

        Ok(Reduction { commands, stats })
    }
}

impl BalanceReducerApi for BalanceReducer {
    fn apply(&self, block: &Block) -> Result<Reduction, ReduceError> {
        self.reduce(block, Direction::Apply)
    }

    fn undo(&self, block: &Block) -> Result<Reduction, ReduceError> {
        self.reduce(block, Direction::Undo)
    }
}

/// Commands for a block that joined the chain.
pub fn apply(block: &Block, config: &ReducerConfig) -> Result<Vec<Command>, ReduceError> {
    let reducer = BalanceReducer::new(config.clone())?;
    Ok(reducer.apply(block)?.commands)
}

/// Commands cancelling a prior [`apply`] of the same block.
pub fn undo(block: &Block, config: &ReducerConfig) -> Result<Vec<Command>, ReduceError> {
    let reducer = BalanceReducer::new(config.clone())?;
    Ok(reducer.undo(block)?.commands)
}
