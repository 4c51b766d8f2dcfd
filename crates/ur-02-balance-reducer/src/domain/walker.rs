//! # Block Walker
//!
//! Visits every output and every resolved input of a block, signs its
//! coin by direction, and merges it under the decoded key.
//!
//! Unresolved inputs are skipped and counted. They are the caller's
//! responsibility: a spend that is not resolved cannot be reflected, and
//! the affected key's balance drifts.

use shared_types::{Block, Delta, Hash, TxOutput};
use tracing::warn;
use ur_01_address_codec::{AddressDecoder, DecodePolicy, Decoded, ExclusionReason};

use super::accumulator::DeltaAccumulator;
use super::entities::{Direction, ReductionStats};
use super::errors::ReduceError;

/// Drives an [`AddressDecoder`] over a block under one error policy.
pub struct BlockWalker<'a, D: AddressDecoder + ?Sized> {
    decoder: &'a D,
    policy: DecodePolicy,
}

impl<'a, D: AddressDecoder + ?Sized> BlockWalker<'a, D> {
    pub fn new(decoder: &'a D, policy: DecodePolicy) -> Self {
        Self { decoder, policy }
    }

    /// Merge every contribution of `block` into `acc`.
    ///
    /// Under [`DecodePolicy::Strict`] the first undecodable address aborts
    /// the walk; the accumulator must then be discarded.
    pub fn walk(
        &self,
        block: &Block,
        direction: Direction,
        acc: &mut DeltaAccumulator,
    ) -> Result<ReductionStats, ReduceError> {
        let mut stats = ReductionStats::default();

        for tx in &block.transactions {
            for output in &tx.outputs {
                stats.outputs_seen += 1;
                self.contribute(&tx.hash, output, direction.output_sign(), acc, &mut stats)?;
            }

            for input in &tx.inputs {
                match &input.as_output {
                    Some(spent) => {
                        stats.resolved_inputs += 1;
                        self.contribute(&tx.hash, spent, direction.input_sign(), acc, &mut stats)?;
                    }
                    None => stats.unresolved_inputs += 1,
                }
            }
        }

        stats.keys_touched = acc.len() as u64;
        Ok(stats)
    }

    fn contribute(
        &self,
        tx_hash: &Hash,
        output: &TxOutput,
        sign: Delta,
        acc: &mut DeltaAccumulator,
        stats: &mut ReductionStats,
    ) -> Result<(), ReduceError> {
        let decoded = match self.decoder.decode(&output.address) {
            Ok(decoded) => decoded,
            Err(source) => match self.policy {
                DecodePolicy::Strict => {
                    return Err(ReduceError::AddressDecode {
                        tx_hash: hex::encode(tx_hash),
                        source,
                    })
                }
                DecodePolicy::Lenient => {
                    warn!(
                        mode = %self.decoder.mode(),
                        tx_hash = %hex::encode(tx_hash),
                        address = %source.hex(),
                        error = %source,
                        "[ur-02] Skipping undecodable address"
                    );
                    stats.decode_failures += 1;
                    Decoded::Excluded(ExclusionReason::Undecodable)
                }
            },
        };

        match decoded {
            Decoded::Key(key) => acc.merge(key, sign * Delta::from(output.coin)),
            Decoded::Excluded(ExclusionReason::Undecodable) => Ok(()),
            Decoded::Excluded(_) => {
                stats.excluded += 1;
                Ok(())
            }
        }
    }
}
