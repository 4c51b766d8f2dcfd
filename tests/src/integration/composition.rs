//! # Multi-Instance Composition
//!
//! Several reducer instances over the same blocks, configured from JSON.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{Command, StorageEvent, TxInput, TxOutput};
    use ur_03_reduce_pipeline::{ChainEvent, PipelineConfig, PipelineError, ReduceStage};

    const CONFIG: &str = r#"{
        "parallel": true,
        "reducers": [
            { "name": "balance_by_address", "addressType": "payment", "prefix": "balance_by_address" },
            { "name": "balance_by_stake_address", "addressType": "stake", "prefix": "balance_by_stake_address" },
            { "name": "stake_sql", "addressType": "stake", "table": "balance_by_stake_address" }
        ]
    }"#;

    fn sample_block() -> shared_types::Block {
        block(
            500,
            vec![tx(
                1,
                vec![TxInput::unresolved([0x01; 32], 3)],
                vec![
                    TxOutput::new(base_address([0x11; HASH_LEN], [0x99; HASH_LEN]), 250),
                    TxOutput::new(enterprise_address([0x22; HASH_LEN]), 75),
                ],
            )],
        )
    }

    #[test]
    fn test_instances_are_independent_and_ordered() {
        let mut stage = ReduceStage::from_config(&PipelineConfig::from_json_str(CONFIG).unwrap())
            .unwrap();
        let events = stage.handle(&ChainEvent::Apply(sample_block())).unwrap();

        let commands: Vec<&Command> = events.iter().filter_map(StorageEvent::command).collect();
        // 2 payment counters, 1 stake counter, upsert + delete
        assert_eq!(commands.len(), 5);

        let keys: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                Command::PnCounter { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert!(keys[0].starts_with("balance_by_address.addr1"));
        assert!(keys[1].starts_with("balance_by_address.addr1"));
        assert!(keys[2].starts_with("balance_by_stake_address.stake1"));
        assert!(matches!(commands[3], Command::ExecuteSql { sql, .. } if sql.starts_with("INSERT")));
        assert!(matches!(commands[4], Command::ExecuteSql { sql, .. } if sql.starts_with("DELETE")));
    }

    #[test]
    fn test_parallel_and_sequential_stages_agree() {
        let parallel = PipelineConfig::from_json_str(CONFIG).unwrap();
        let sequential = parallel.clone().with_parallel(false);

        let mut a = ReduceStage::from_config(&parallel).unwrap();
        let mut b = ReduceStage::from_config(&sequential).unwrap();
        let event = ChainEvent::Apply(sample_block());

        assert_eq!(a.handle(&event).unwrap(), b.handle(&event).unwrap());
    }

    #[test]
    fn test_strict_instance_aborts_whole_block() {
        let config = r#"{
            "reducers": [
                { "name": "lenient", "onDecodeError": "skip" },
                { "name": "strict" }
            ]
        }"#;
        let mut stage = ReduceStage::from_config(&PipelineConfig::from_json_str(config).unwrap())
            .unwrap();

        let mut bad = sample_block();
        bad.transactions[0].outputs.push(TxOutput::new(vec![0x9F, 0x00], 1));

        let err = stage.handle(&ChainEvent::Apply(bad)).unwrap_err();
        assert_eq!(err.reducer(), Some("strict"));
        assert!(matches!(err, PipelineError::Reduce { .. }));
        assert_eq!(stage.stats().ops_count, 0);
    }

    #[test]
    fn test_all_lenient_instances_continue_past_bad_address() {
        let config = r#"{ "reducers": [ { "name": "a", "onDecodeError": "skip" } ] }"#;
        let mut stage = ReduceStage::from_config(&PipelineConfig::from_json_str(config).unwrap())
            .unwrap();

        let mut bad = sample_block();
        bad.transactions[0].outputs.push(TxOutput::new(vec![0x9F, 0x00], 1));

        let events = stage.handle(&ChainEvent::Apply(bad)).unwrap();
        assert_eq!(events.len(), 4);
    }
}
