use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::SmallRng;

use hull2d::geometry::convex_hull::convex_hull_indices;
use hull2d::geometry::primitives::Point;

criterion_main!(benches);
criterion_group!(benches, convex_hull_bench);

const POOL_SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Benchmark the Graham scan on uniformly scattered point pools of increasing size
fn convex_hull_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for size in POOL_SIZES {
        let mut rng = SmallRng::seed_from_u64(0);
        let points: Vec<Point> = (0..size)
            .map(|_| {
                Point(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                )
            })
            .collect();

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| convex_hull_indices(&points))
        });
    }
    group.finish();
}
