//! Sampling and greedy selection benchmarks.
//!
//! Run with: cargo bench -p immunet-engine --bench greedy_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use immunet_core::events::EventDispatcher;
use immunet_engine::generators::{erdos_renyi, ErdosRenyiParams};
use immunet_engine::model::ContagionModel;
use immunet_engine::sampling::RealizationSampler;
use immunet_engine::selection::GreedySelector;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn model(nodes: usize) -> ContagionModel {
    let mut params = ErdosRenyiParams::new(nodes);
    params.edge_probability = 4.0 / nodes as f64;
    params.model.num_instances = 50;
    params.model.vaccine_ratio = 0.05;
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    erdos_renyi::generate(&params, &mut rng).unwrap()
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    for nodes in [100, 400] {
        let model = model(nodes);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &model, |b, model| {
            b.iter(|| {
                RealizationSampler::new(model.num_instances)
                    .with_seed(7)
                    .sample(&model.network)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    group.sample_size(10);
    for nodes in [60, 120] {
        let model = model(nodes);
        let realizations = RealizationSampler::new(model.num_instances)
            .with_seed(7)
            .sample(&model.network)
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &model, |b, model| {
            b.iter(|| {
                let mut set = realizations.clone();
                GreedySelector::new(model.num_vaccines).select(
                    &model.network,
                    &mut set,
                    &EventDispatcher::new(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampling, bench_greedy);
criterion_main!(benches);
