use criterion::{black_box, criterion_group, criterion_main, Criterion};
use predprey_core::config::SimConfig;
use predprey_core::systems::step;
use predprey_core::Population;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_step_default_population(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(config.model.seed);
    let initial = Population::random_with_rng(&config, &mut rng);

    c.bench_function("step_default_population", |b| {
        b.iter_batched(
            || (initial.clone(), ChaCha8Rng::seed_from_u64(7)),
            |(mut population, mut rng)| {
                let report = step(&mut population, &config, &mut rng);
                black_box(report.map(|r| r.births()).unwrap_or(0))
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_initial_sampling(c: &mut Criterion) {
    let config = SimConfig::default();

    c.bench_function("sample_default_population", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(12);
            black_box(Population::random_with_rng(&config, &mut rng))
        })
    });
}

criterion_group!(benches, bench_step_default_population, bench_initial_sampling);
criterion_main!(benches);
