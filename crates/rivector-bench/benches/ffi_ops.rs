//! Criterion benchmarks for the C boundary: handle table cost on top of
//! the kernel.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rivector_bench::sample_pairs;
use rivector_ffi::ops::{rivec_vector2_add, rivec_vector2_dot};
use rivector_ffi::{rivec_vector2_free, rivec_vector2_new};

const N: usize = 1000;

fn alloc_pairs(seed: u64) -> Vec<(u64, u64)> {
    sample_pairs(seed, N)
        .into_iter()
        .map(|(a, b)| {
            let (mut ha, mut hb) = (0, 0);
            rivec_vector2_new(a.x, a.y, &mut ha);
            rivec_vector2_new(b.x, b.y, &mut hb);
            (ha, hb)
        })
        .collect()
}

fn free_pairs(handles: Vec<(u64, u64)>) {
    for (a, b) in handles {
        rivec_vector2_free(a);
        rivec_vector2_free(b);
    }
}

/// Benchmark: allocate then release 1000 vectors.
fn bench_lifecycle(c: &mut Criterion) {
    c.bench_function("ffi_new_free_1k", |b| {
        b.iter(|| {
            for i in 0..N {
                let mut h = 0;
                rivec_vector2_new(i as f32, 1.0, &mut h);
                rivec_vector2_free(black_box(h));
            }
        });
    });
}

/// Benchmark: scalar result, no allocation.
fn bench_scalar(c: &mut Criterion) {
    let handles = alloc_pairs(42);

    c.bench_function("ffi_dot_1k", |b| {
        b.iter(|| {
            let mut out = 0.0f32;
            for &(a, w) in &handles {
                rivec_vector2_dot(a, w, &mut out);
                black_box(out);
            }
        });
    });

    free_pairs(handles);
}

/// Benchmark: vector result, one allocation and release per call.
fn bench_vector_result(c: &mut Criterion) {
    let handles = alloc_pairs(42);

    c.bench_function("ffi_add_free_1k", |b| {
        b.iter(|| {
            for &(a, w) in &handles {
                let mut out = 0;
                rivec_vector2_add(a, w, &mut out);
                rivec_vector2_free(black_box(out));
            }
        });
    });

    free_pairs(handles);
}

criterion_group!(benches, bench_lifecycle, bench_scalar, bench_vector_result);
criterion_main!(benches);
