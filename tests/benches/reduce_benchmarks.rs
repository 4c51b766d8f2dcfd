//! # Block Reduction Benchmarks
//!
//! | Case | What grows |
//! |------|------------|
//! | single reducer | outputs per block, payment vs stake mode |
//! | composed stage | reducer instances, sequential vs rayon |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shared_types::{Block, TxInput, TxOutput};
use std::time::Duration;
use ur_02_balance_reducer::{BalanceReducer, Direction, ReducerConfig};
use ur_03_reduce_pipeline::{ChainEvent, NamedReducerConfig, PipelineConfig, ReduceStage};
use ur_tests::fixtures::{base_address, block, enterprise_address, tx, HASH_LEN};

/// A block of `outputs` outputs over a small population of wallets, half
/// of them also spent as resolved inputs.
fn random_block(outputs: usize, seed: u64) -> Block {
    let mut rng = StdRng::seed_from_u64(seed);
    let wallets: Vec<Vec<u8>> = (0..64u8)
        .map(|i| {
            if i % 8 == 0 {
                enterprise_address([i; HASH_LEN])
            } else {
                base_address([i; HASH_LEN], [i % 16; HASH_LEN])
            }
        })
        .collect();

    let created: Vec<TxOutput> = (0..outputs)
        .map(|_| {
            let wallet = &wallets[rng.gen_range(0..wallets.len())];
            TxOutput::new(wallet.clone(), rng.gen_range(1_000_000..1_000_000_000))
        })
        .collect();

    let transactions = created
        .chunks(4)
        .enumerate()
        .map(|(i, chunk)| {
            let inputs: Vec<TxInput> = chunk
                .iter()
                .take(2)
                .enumerate()
                .map(|(j, out)| TxInput::resolved([i as u8; 32], j as u32, out.clone()))
                .collect();
            tx(i as u8, inputs, chunk.to_vec())
        })
        .collect();

    block(1, transactions)
}

fn bench_single_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ur-02-balance-reducer");
    group.measurement_time(Duration::from_secs(5));

    for size in [100, 1_000, 10_000] {
        let b = random_block(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        for (label, config) in [
            ("payment_crdt", ReducerConfig::payment().with_prefix("bal")),
            ("stake_crdt", ReducerConfig::stake().with_prefix("bal")),
            ("stake_sql", ReducerConfig::stake().with_table("bal")),
        ] {
            let reducer = BalanceReducer::new(config).unwrap();
            group.bench_with_input(BenchmarkId::new(label, size), &b, |bench, b| {
                bench.iter(|| black_box(reducer.reduce(b, Direction::Apply).unwrap()))
            });
        }
    }

    group.finish();
}

fn bench_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("ur-03-reduce-pipeline");
    group.measurement_time(Duration::from_secs(5));

    let event = ChainEvent::Apply(random_block(5_000, 11));

    for instances in [1, 4, 8] {
        let reducers: Vec<NamedReducerConfig> = (0..instances)
            .map(|i| {
                let config = if i % 2 == 0 {
                    ReducerConfig::payment()
                } else {
                    ReducerConfig::stake()
                };
                NamedReducerConfig::new(format!("r{}", i), config.with_prefix(format!("p{}", i)))
            })
            .collect();

        for parallel in [false, true] {
            let config = PipelineConfig::new(reducers.clone()).with_parallel(parallel);
            let mut stage = ReduceStage::from_config(&config).unwrap();
            let label = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(label, instances), &event, |bench, event| {
                bench.iter(|| black_box(stage.handle(event).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_reducer, bench_stage);
criterion_main!(benches);
