//! Stage input and bookkeeping.

use serde::{Deserialize, Serialize};
use shared_types::{Block, Point};

/// One step of the chain follower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ChainEvent {
    /// A block joined the chain.
    Apply(Block),
    /// A block was rolled back.
    Undo(Block),
    /// The follower rewound to a point.
    Reset(Point),
}

impl ChainEvent {
    pub fn point(&self) -> Point {
        match self {
            ChainEvent::Apply(block) | ChainEvent::Undo(block) => block.point(),
            ChainEvent::Reset(point) => *point,
        }
    }

    /// Metric label for this event.
    pub fn kind(&self) -> &'static str {
        match self {
            ChainEvent::Apply(_) => "apply",
            ChainEvent::Undo(_) => "undo",
            ChainEvent::Reset(_) => "reset",
        }
    }
}

/// Snapshot of what a stage has processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageStats {
    /// Chain events handled successfully.
    pub ops_count: u64,
    /// Slot of the last successfully handled event.
    pub last_slot: Option<u64>,
    pub blocks_applied: u64,
    pub blocks_undone: u64,
    pub resets: u64,
    /// Storage commands emitted across all blocks.
    pub commands_emitted: u64,
}
