//! # Reorg Replays
//!
//! Applying a chain, rolling part of it back, and applying a fork must
//! leave the same balances as applying the fork directly.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use proptest::prelude::*;
    use shared_types::{Block, Command, StorageEvent, TxOutput};
    use std::collections::BTreeMap;
    use ur_02_balance_reducer::ReducerConfig;
    use ur_03_reduce_pipeline::{ChainEvent, NamedReducerConfig, PipelineConfig, ReduceStage};

    /// Replays counter commands into a key → balance map, dropping zeros.
    #[derive(Default)]
    struct CounterStore(BTreeMap<String, i128>);

    impl CounterStore {
        fn write(&mut self, events: Vec<StorageEvent>) {
            for event in events {
                if let StorageEvent::Command(Command::PnCounter { key, value }) = event {
                    *self.0.entry(key).or_insert(0) += value;
                }
            }
            self.0.retain(|_, v| *v != 0);
        }
    }

    fn stage() -> ReduceStage {
        ReduceStage::from_config(&PipelineConfig::new(vec![
            NamedReducerConfig::new("addr", ReducerConfig::payment().with_prefix("a")),
            NamedReducerConfig::new("stake", ReducerConfig::stake().with_prefix("s")),
        ]))
        .unwrap()
    }

    fn chain() -> Vec<Block> {
        let alice = TxOutput::new(base_address([0xA1; HASH_LEN], [0x51; HASH_LEN]), 5_000);
        let bob = TxOutput::new(base_address([0xB0; HASH_LEN], [0x52; HASH_LEN]), 3_000);
        let bob_change = TxOutput::new(base_address([0xB0; HASH_LEN], [0x52; HASH_LEN]), 1_500);
        let carol = TxOutput::new(enterprise_address([0xC0; HASH_LEN]), 500);

        vec![
            block(1, vec![tx(1, vec![], vec![alice.clone()])]),
            block(2, vec![tx(2, vec![spend(&alice)], vec![bob.clone(), carol])]),
            block(3, vec![tx(3, vec![spend(&bob)], vec![bob_change])]),
        ]
    }

    #[test]
    fn test_apply_then_undo_all_returns_to_empty() {
        let mut stage = stage();
        let mut store = CounterStore::default();

        for b in chain() {
            store.write(stage.handle(&ChainEvent::Apply(b)).unwrap());
        }
        assert!(!store.0.is_empty());

        for b in chain().into_iter().rev() {
            store.write(stage.handle(&ChainEvent::Undo(b)).unwrap());
        }
        assert!(store.0.is_empty(), "left over: {:?}", store.0);
        assert_eq!(stage.stats().ops_count, 6);
    }

    #[test]
    fn test_rollback_and_fork_matches_direct_application() {
        let fork = block(
            3,
            vec![tx(
                9,
                vec![spend(&TxOutput::new(
                    base_address([0xB0; HASH_LEN], [0x52; HASH_LEN]),
                    3_000,
                ))],
                vec![TxOutput::new(enterprise_address([0xD0; HASH_LEN]), 3_000)],
            )],
        );

        let mut reorged = CounterStore::default();
        let mut stage_a = stage();
        for b in chain() {
            reorged.write(stage_a.handle(&ChainEvent::Apply(b)).unwrap());
        }
        let tip = chain().pop().unwrap();
        reorged.write(stage_a.handle(&ChainEvent::Undo(tip)).unwrap());
        reorged.write(stage_a.handle(&ChainEvent::Apply(fork.clone())).unwrap());

        let mut direct = CounterStore::default();
        let mut stage_b = stage();
        for b in chain().into_iter().take(2).chain(std::iter::once(fork)) {
            direct.write(stage_b.handle(&ChainEvent::Apply(b)).unwrap());
        }

        assert_eq!(reorged.0, direct.0);
    }

    #[test]
    fn test_balances_match_unspent_outputs() {
        let mut stage = stage();
        let mut store = CounterStore::default();
        for b in chain() {
            store.write(stage.handle(&ChainEvent::Apply(b)).unwrap());
        }

        // alice spent; bob's first output spent; bob_change and carol unspent
        let payment: Vec<i128> = store
            .0
            .iter()
            .filter(|(k, _)| k.starts_with("a."))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(payment.iter().sum::<i128>(), 2_000);
        assert!(payment.iter().all(|v| *v > 0));

        let stake_total: i128 = store
            .0
            .iter()
            .filter(|(k, _)| k.starts_with("s."))
            .map(|(_, v)| *v)
            .sum();
        assert_eq!(stake_total, 1_500);
    }

    proptest! {
        #[test]
        fn prop_undo_cancels_apply_through_stage(
            coins in proptest::collection::vec((0u8..5, 1u64..1_000_000_000), 1..20),
        ) {
            let outputs: Vec<TxOutput> = coins
                .iter()
                .map(|(who, coin)| TxOutput::new(base_address([*who; HASH_LEN], [*who; HASH_LEN]), *coin))
                .collect();
            let inputs = outputs.iter().take(outputs.len() / 2).map(spend).collect();
            let b = block(7, vec![tx(1, inputs, outputs)]);

            let mut stage = stage();
            let mut store = CounterStore::default();
            store.write(stage.handle(&ChainEvent::Apply(b.clone())).unwrap());
            store.write(stage.handle(&ChainEvent::Undo(b)).unwrap());
            prop_assert!(store.0.is_empty());
        }
    }
}
