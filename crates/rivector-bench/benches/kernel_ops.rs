//! Criterion micro-benchmarks for the pure kernel.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rivector_bench::{sample_pairs, sample_scalars};
use rivector_core::Vector2;

const N: usize = 1000;

/// Benchmark: magnitude and normalized over 1000 vectors.
fn bench_unary(c: &mut Criterion) {
    let pairs = sample_pairs(42, N);

    c.bench_function("magnitude_1k", |b| {
        b.iter(|| {
            for &(v, _) in &pairs {
                black_box(black_box(v).magnitude());
            }
        });
    });

    c.bench_function("normalized_1k", |b| {
        b.iter(|| {
            for &(v, _) in &pairs {
                black_box(black_box(v).normalized());
            }
        });
    });
}

/// Benchmark: angle functions over 1000 pairs (acos / atan2 heavy).
fn bench_angles(c: &mut Criterion) {
    let pairs = sample_pairs(42, N);

    c.bench_function("angle_1k", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                black_box(black_box(v).angle(w));
            }
        });
    });

    c.bench_function("signed_angle_1k", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                black_box(black_box(v).signed_angle(w));
            }
        });
    });
}

/// Benchmark: clamp_magnitude and move_towards with per-pair bounds.
fn bench_bounded(c: &mut Criterion) {
    let pairs = sample_pairs(7, N);
    let bounds = sample_scalars(8, N);

    c.bench_function("clamp_magnitude_1k", |b| {
        b.iter(|| {
            for (&(v, _), &max_len) in pairs.iter().zip(&bounds) {
                black_box(black_box(v).clamp_magnitude(max_len));
            }
        });
    });

    c.bench_function("move_towards_1k", |b| {
        b.iter(|| {
            for (&(v, w), &max_delta) in pairs.iter().zip(&bounds) {
                black_box(Vector2::move_towards(black_box(v), w, max_delta));
            }
        });
    });
}

/// Benchmark: 1000 chained smooth_damp steps toward a fixed target.
fn bench_smooth_damp(c: &mut Criterion) {
    let target = Vector2::new(500.0, -250.0);

    c.bench_function("smooth_damp_chain_1k", |b| {
        b.iter(|| {
            let mut position = Vector2::ZERO;
            let mut velocity = Vector2::ZERO;
            for _ in 0..N {
                let step =
                    Vector2::smooth_damp(position, target, velocity, 0.3, f32::INFINITY, 1.0 / 60.0);
                position = step.position;
                velocity = step.velocity;
            }
            black_box(position)
        });
    });
}

criterion_group!(
    benches,
    bench_unary,
    bench_angles,
    bench_bounded,
    bench_smooth_damp
);
criterion_main!(benches);
