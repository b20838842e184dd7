use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sortbench::dist::rng_for;
use sortbench::prelude::*;
use std::hint::black_box;

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random 100k");
    group.sample_size(10);

    let mut rng = rng_for(Some(42));
    let input = Distribution::Random.generate(100_000, &mut rng);

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.display_name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| algorithm.sort(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    // Baseline
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Presorted 100k");
    group.sample_size(10);

    let mut rng = rng_for(Some(42));

    for case in [Distribution::Ascending, Distribution::Descending] {
        let input = case.generate(100_000, &mut rng);
        for algorithm in Algorithm::ALL {
            let name = format!("{} ({})", algorithm.display_name(), case.name());
            group.bench_function(&name, |b| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| algorithm.sort(black_box(&mut data)).unwrap(),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_narrow_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("Narrow range 100k");
    group.sample_size(10);

    // Few distinct values: counting sort's best case, quicksort's duplicate
    // stress case.
    let input: Vec<i64> = (0..100_000).map(|i| i % 16).collect();

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.display_name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| algorithm.sort(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_presorted, bench_narrow_range);
criterion_main!(benches);
