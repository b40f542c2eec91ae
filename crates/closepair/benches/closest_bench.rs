//! Criterion benchmarks for the closest-pair solvers.
//! Focus sizes: n in {32, 256, 2048, 16384}; the quadratic baseline only
//! runs where it stays cheap.

use closepair::planar::rand::{draw_points_uniform, PointCount, ReplayToken, ScatterCfg};
use closepair::{brute_force, find_closest_pair};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;

fn random_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    draw_points_uniform(
        ScatterCfg {
            count: PointCount::Fixed(n),
            half_extent: 100.0,
            duplicate_frac: 0.0,
        },
        ReplayToken { seed, index: 0 },
    )
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[32usize, 256, 2048, 16384] {
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || random_cloud(n, 43),
                |pts| {
                    let _res = find_closest_pair(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        if n <= 2048 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || random_cloud(n, 43),
                    |pts| {
                        let _res = brute_force(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
