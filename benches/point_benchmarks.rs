//! Benchmarking suite for kdpoint primitives

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kdpoint::{distance_sq, sort_points, AxisOrder, Datapoint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Benchmark squared-distance evaluation against a fixed probe point
fn bench_distance_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_operations");
    group.measurement_time(Duration::from_secs(10));

    let size = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    let probes: Vec<Datapoint<()>> = (0..size).map(|_| Datapoint::random(&mut rng, 3)).collect();
    let origin: Datapoint<()> = Datapoint::detached([0.0, 0.0, 0.0]);

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("distance_sq_3d", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(distance_sq(&origin, probe).unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark in-place axis sorting of a shuffled point set
fn bench_sort_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_operations");
    group.measurement_time(Duration::from_secs(10));

    let size = 1000;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("sort_axis_0", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(42);
                (0..size)
                    .map(|_| Datapoint::<()>::random_in_range(&mut rng, 3, -100.0, 100.0))
                    .collect::<Vec<_>>()
            },
            |mut points| {
                sort_points(&mut points, &AxisOrder::new(0));
                black_box(points);
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_distance_operations, bench_sort_operations);
criterion_main!(benches);
