use criterion::Criterion;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn percentile(criterion: &mut Criterion) {
    let max_value = 1_000_000_000_000_i64;
    let histogram = super::random_histogram(100_000, max_value);
    // warm the caches so only the lookups are measured
    histogram.value_at_percentile(0.5);

    let mut group = criterion.benchmark_group("percentile");
    group.throughput(criterion::Throughput::Elements(1));

    let mut rng = StdRng::seed_from_u64(42);
    group.bench_function("percentile-interpolated", |bencher| {
        bencher.iter(|| histogram.percentile(rng.gen_range(0..max_value)));
    });
    group.bench_function("get-interpolated", |bencher| {
        bencher.iter(|| histogram.get_interpolated(rng.gen_range(0..max_value)));
    });
    group.bench_function("value-at-percentile", |bencher| {
        bencher.iter(|| histogram.value_at_percentile(rng.gen::<f64>()));
    });
}

criterion::criterion_group!(benches, percentile);
