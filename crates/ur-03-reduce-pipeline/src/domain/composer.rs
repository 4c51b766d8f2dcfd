//! # Reducer Composition
//!
//! Several independently configured reducer instances over the same
//! block. Each instance reduces with its own accumulator, and their
//! command lists are concatenated in configuration order.
//!
//! Parallel evaluation uses rayon and yields exactly the sequential
//! result: outputs are collected by index, and the first failing reducer
//! in configuration order decides the error.

use rayon::prelude::*;
use shared_types::{Block, Command};
use ur_02_balance_reducer::{BalanceReducer, Direction, Reduction, ReductionStats};

use super::config::PipelineConfig;
use super::errors::PipelineError;

/// Below this many reducers evaluation stays on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 2;

/// A configured reducer instance with its label.
#[derive(Debug, Clone)]
pub struct NamedReducer {
    pub name: String,
    pub reducer: BalanceReducer,
}

/// One reducer's contribution to a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedReduction {
    pub name: String,
    pub reduction: Reduction,
}

/// Result of running every reducer over one block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedReduction {
    pub parts: Vec<NamedReduction>,
}

impl ComposedReduction {
    /// All commands, reducer by reducer in configuration order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.parts.iter().flat_map(|p| p.reduction.commands.iter())
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.parts
            .into_iter()
            .flat_map(|p| p.reduction.commands)
            .collect()
    }

    pub fn command_count(&self) -> usize {
        self.parts.iter().map(|p| p.reduction.commands.len()).sum()
    }

    /// Field-wise sum of every reducer's stats.
    pub fn total_stats(&self) -> ReductionStats {
        let mut total = ReductionStats::default();
        for part in &self.parts {
            total.merge(&part.reduction.stats);
        }
        total
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReducerComposer {
    reducers: Vec<NamedReducer>,
    parallel: bool,
}

impl ReducerComposer {
    /// Build every reducer of a validated configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let reducers = config
            .reducers
            .iter()
            .map(|named| {
                BalanceReducer::new(named.config.clone())
                    .map(|reducer| NamedReducer {
                        name: named.name.clone(),
                        reducer,
                    })
                    .map_err(|source| PipelineError::InvalidReducer {
                        name: named.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            reducers,
            parallel: config.parallel,
        })
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|r| r.name.as_str())
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Run every reducer over `block`. Any reducer error fails the whole
    /// composition.
    pub fn reduce(
        &self,
        block: &Block,
        direction: Direction,
    ) -> Result<ComposedReduction, PipelineError> {
        let run = |named: &NamedReducer| {
            named
                .reducer
                .reduce(block, direction)
                .map(|reduction| NamedReduction {
                    name: named.name.clone(),
                    reduction,
                })
                .map_err(|source| PipelineError::Reduce {
                    reducer: named.name.clone(),
                    source,
                })
        };

        let results: Vec<Result<NamedReduction, PipelineError>> =
            if self.parallel && self.reducers.len() >= PARALLEL_THRESHOLD {
                self.reducers.par_iter().map(run).collect()
            } else {
                self.reducers.iter().map(run).collect()
            };

        let parts = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(ComposedReduction { parts })
    }
}
