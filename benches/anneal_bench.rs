//! Criterion benchmarks for the knapsack annealing engine.
//!
//! Uses seeded random 50-item instances at a few capacity ratios to
//! measure engine overhead per iteration budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_anneal::knapsack::{NeighborGenerator, ProblemInstance, Solution};
use knapsack_anneal::sa::{AnnealConfig, AnnealingEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn instance(capacity: u64) -> ProblemInstance {
    let mut rng = StdRng::seed_from_u64(7);
    ProblemInstance::random(capacity, 100, 100, &mut rng).expect("valid instance")
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_knapsack");
    group.sample_size(10);

    for &capacity in &[250u64, 1000, 2500] {
        let problem = instance(capacity);
        let config = AnnealConfig::default()
            .with_max_iterations(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut engine =
                        AnnealingEngine::new(black_box(c.clone()), black_box(p.clone()))
                            .expect("valid config");
                    black_box(engine.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_neighbor(c: &mut Criterion) {
    let problem = instance(1000);
    let mut rng = StdRng::seed_from_u64(1);
    let mut solution = Solution::random(problem.len(), &mut rng);
    NeighborGenerator.repair(&mut solution, &problem, &mut rng);

    c.bench_function("neighbor_move", |b| {
        b.iter(|| {
            let mut candidate = solution.clone();
            black_box(NeighborGenerator.apply(&mut candidate, black_box(&problem), &mut rng))
        })
    });
}

criterion_group!(benches, bench_engine, bench_neighbor);
criterion_main!(benches);
