//! Mining benchmarks.
//!
//! Benchmarks: raw Apriori mining and the full pipeline over synthetic
//! baskets of increasing size.
//! Run with: cargo bench -p affinity-mining --bench mining_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use affinity_mining::{encode, mine, MiningParams, MiningPipeline, Transaction};

/// Deterministic synthetic baskets: `count` transactions over a universe
/// of `universe` items, three to eight items each, with co-occurrence
/// clusters so level 2 has real survivors.
fn synthetic_transactions(count: usize, universe: usize) -> Vec<Transaction> {
    let mut state = 0x2545f4914f6cdd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|i| {
            let basket_size = 3 + (next() % 6) as usize;
            let cluster = (i % 8) * (universe / 8);
            let items: Vec<String> = (0..basket_size)
                .map(|_| {
                    let offset = (next() % (universe / 4) as u64) as usize;
                    format!("SKU_{:04}", (cluster + offset) % universe)
                })
                .collect();
            Transaction::new(items)
        })
        .collect()
}

fn bench_mine(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_mine");
    group.sample_size(10);

    for size in [1_000, 10_000, 50_000] {
        let transactions = synthetic_transactions(size, 200);
        let (_, matrix) = encode(&transactions).unwrap();

        group.bench_with_input(BenchmarkId::new("mine", size), &size, |b, _| {
            b.iter(|| mine(&matrix, 0.01, 2));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    for size in [1_000, 10_000] {
        let transactions = synthetic_transactions(size, 200);
        let pipeline = MiningPipeline::new(MiningParams {
            min_lift: 0.0,
            ..MiningParams::default()
        });

        group.bench_with_input(BenchmarkId::new("full_run", size), &size, |b, _| {
            b.iter(|| pipeline.run(&transactions, "2025-06-01").unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mine, bench_pipeline);
criterion_main!(benches);
