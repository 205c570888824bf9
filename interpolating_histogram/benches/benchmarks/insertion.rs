use criterion::{BatchSize, Criterion};
use interpolating_histogram::Histogram;

pub fn insertion(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insertion");
    group.throughput(criterion::Throughput::Elements(1));

    for distinct in [16, 1_024, 65_536] {
        group.bench_function(format!("add-distinct-{distinct:05}"), |bencher| {
            let mut histogram = Histogram::new();
            let mut i: i64 = 0;
            bencher.iter(|| {
                histogram.add(i % distinct);
                i += 1;
            });
        });
    }

    // The first query after an add pays for re-sorting and re-accumulating
    group.bench_function("add-then-percentile", |bencher| {
        bencher.iter_batched_ref(
            || super::random_histogram(100_000, 1_000_000_000_000),
            |histogram| {
                histogram.add(500_000_000_000_i64);
                histogram.percentile(250_000_000_000)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion::criterion_group!(benches, insertion);
