//! Criterion benchmarks for the OneMax GA.
//!
//! Measures the full run and the individual operators on random
//! populations of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onemax_ga::ga::{crossover, mutation, select_parents, GaConfig, GaRunner, Population, Stage, Statistics};
use onemax_ga::random::create_rng;

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("onemax_run");
    group.sample_size(10);

    for (n, pop, gen) in [(8usize, 10usize, 100usize), (32, 50, 100), (128, 100, 50)] {
        let config = GaConfig::default()
            .with_chromosome_length(n)
            .with_default_mutation_rate()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut reports: Vec<(Stage, Statistics)> = Vec::new();
                    let result = GaRunner::run(black_box(config), &mut reports);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("onemax_operators");

    for &n in &[8usize, 64, 256] {
        let mut rng = create_rng(7);
        let population = Population::random(100, n, &mut rng);
        let pm = 1.0 / n as f64;

        group.bench_with_input(BenchmarkId::new("selection", n), &population, |b, p| {
            b.iter(|| black_box(select_parents(black_box(p), 2, &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("crossover", n), &population, |b, p| {
            b.iter(|| black_box(crossover(p.clone(), 0.6, &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("mutation", n), &population, |b, p| {
            b.iter(|| black_box(mutation(p.clone(), pm, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_operators);
criterion_main!(benches);
