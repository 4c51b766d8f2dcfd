//! # Reduce Stage
//!
//! Turns chain events into framed storage events.
//!
//! ```text
//! Apply(b) / Undo(b) → BlockStarting(p), <commands of every reducer>, BlockFinished(p)
//! Reset(p)           → Reset(p)
//! ```
//!
//! A failed block yields an error and no storage events; the stage
//! counters are left as they were.

use shared_types::{Block, StorageEvent};
use tracing::{debug, info, instrument};
use ur_02_balance_reducer::Direction;
use ur_telemetry::ReducerCounts;

use crate::domain::{ChainEvent, ComposedReduction, PipelineConfig, PipelineError, ReducerComposer, StageStats};

pub struct ReduceStage {
    composer: ReducerComposer,
    stats: StageStats,
}

impl ReduceStage {
    pub fn new(composer: ReducerComposer) -> Self {
        Self {
            composer,
            stats: StageStats::default(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let composer = ReducerComposer::from_config(config)?;
        info!(
            reducers = ?composer.names().collect::<Vec<_>>(),
            parallel = composer.is_parallel(),
            "[ur-03] Reduce stage configured"
        );
        Ok(Self::new(composer))
    }

    pub fn composer(&self) -> &ReducerComposer {
        &self.composer
    }

    /// Current counters.
    pub fn stats(&self) -> StageStats {
        self.stats
    }

    /// Handle one chain event.
    #[instrument(skip(self, event), fields(event = event.kind(), slot = event.point().slot_or_default()))]
    pub fn handle(&mut self, event: &ChainEvent) -> Result<Vec<StorageEvent>, PipelineError> {
        let events = match event {
            ChainEvent::Apply(block) => self.reduce_block(block, Direction::Apply)?,
            ChainEvent::Undo(block) => self.reduce_block(block, Direction::Undo)?,
            ChainEvent::Reset(point) => {
                info!(point = %point, "[ur-03] Resetting to point");
                self.stats.resets += 1;
                vec![StorageEvent::Reset(*point)]
            }
        };

        ur_telemetry::record_block(event.kind());
        self.stats.ops_count += 1;
        self.stats.last_slot = Some(event.point().slot_or_default());
        Ok(events)
    }

    fn reduce_block(
        &mut self,
        block: &Block,
        direction: Direction,
    ) -> Result<Vec<StorageEvent>, PipelineError> {
        let composed = self.composer.reduce(block, direction)?;
        record_metrics(&composed);

        let totals = composed.total_stats();
        let point = block.point();
        debug!(
            direction = direction.as_str(),
            commands = composed.command_count(),
            keys_touched = totals.keys_touched,
            excluded = totals.excluded,
            unresolved_inputs = totals.unresolved_inputs,
            "[ur-03] Block reduced"
        );

        match direction {
            Direction::Apply => self.stats.blocks_applied += 1,
            Direction::Undo => self.stats.blocks_undone += 1,
        }
        self.stats.commands_emitted += composed.command_count() as u64;

        let mut events = Vec::with_capacity(composed.command_count() + 2);
        events.push(StorageEvent::BlockStarting(point));
        events.extend(composed.into_commands().into_iter().map(StorageEvent::Command));
        events.push(StorageEvent::BlockFinished(point));
        Ok(events)
    }
}

fn record_metrics(composed: &ComposedReduction) {
    for part in &composed.parts {
        let stats = &part.reduction.stats;
        ur_telemetry::record_reduction(
            &part.name,
            ReducerCounts {
                commands: part.reduction.commands.len() as u64,
                unresolved_inputs: stats.unresolved_inputs,
                excluded: stats.excluded,
                decode_failures: stats.decode_failures,
            },
        );
    }
}
