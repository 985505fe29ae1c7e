//! Criterion benchmarks for timetable fitness evaluation and GA runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_timetable::catalog::sample;
use u_timetable::ga::{GaConfig, GaRunner};
use u_timetable::random::create_rng;
use u_timetable::timetable::TimetableProblem;

fn bench_fitness(c: &mut Criterion) {
    let problem = TimetableProblem::new(sample::curriculum().build().unwrap());
    let mut rng = create_rng(42);
    let chromosome = problem.random_chromosome(&mut rng);
    let evaluator = problem.evaluator();

    c.bench_function("fitness_curriculum", |b| {
        b.iter(|| evaluator.fitness(black_box(&chromosome)))
    });
}

fn bench_ga(c: &mut Criterion) {
    let problem = TimetableProblem::new(sample::curriculum().build().unwrap());
    let mut group = c.benchmark_group("ga_curriculum");
    group.sample_size(10);

    for &pop in &[50usize, 100, 200] {
        group.bench_with_input(BenchmarkId::new("pop", pop), &pop, |b, &pop| {
            let config = GaConfig::default()
                .with_population_size(pop)
                .with_num_generations(50)
                .with_seed(42);
            b.iter(|| GaRunner::run(&problem, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fitness, bench_ga);
criterion_main!(benches);
