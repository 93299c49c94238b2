//! Integration test: the C boundary under concurrent callers.
//!
//! Several threads allocate, operate on and release their own vectors at
//! once. Results must match the kernel and every handle must come back.
//! Kept in its own test binary so the process-wide live count is only
//! moved by this test.

use std::thread;

use rivector_core::Vector2;
use rivector_ffi::ops::{
    rivec_vector2_add, rivec_vector2_dot, rivec_vector2_normalized, rivec_vector2_scale,
};
use rivector_ffi::{
    rivec_live_vectors, rivec_vector2_free, rivec_vector2_get_x, rivec_vector2_get_y,
    rivec_vector2_new, RivecStatus,
};

const OK: i32 = RivecStatus::Ok as i32;
const THREADS: u32 = 8;
const ROUNDS: u32 = 500;

fn live() -> u64 {
    let mut n = 0;
    assert_eq!(rivec_live_vectors(&mut n), OK);
    n
}

fn read(handle: u64) -> Vector2 {
    let (mut x, mut y) = (f32::NAN, f32::NAN);
    assert_eq!(rivec_vector2_get_x(handle, &mut x), OK);
    assert_eq!(rivec_vector2_get_y(handle, &mut y), OK);
    Vector2::new(x, y)
}

fn new(v: Vector2) -> u64 {
    let mut h = 0;
    assert_eq!(rivec_vector2_new(v.x, v.y, &mut h), OK);
    assert_ne!(h, 0);
    h
}

fn worker(id: u32) {
    for round in 0..ROUNDS {
        let a = Vector2::new(id as f32 + 1.0, round as f32);
        let b = Vector2::new(-(round as f32), 0.5 * id as f32);
        let ha = new(a);
        let hb = new(b);

        let mut sum = 0;
        assert_eq!(rivec_vector2_add(ha, hb, &mut sum), OK);
        assert_eq!(read(sum), a + b);

        let mut unit = 0;
        assert_eq!(rivec_vector2_normalized(ha, &mut unit), OK);
        assert_eq!(read(unit), a.normalized());

        let mut scaled = 0;
        assert_eq!(rivec_vector2_scale(hb, 3.0, &mut scaled), OK);
        assert_eq!(read(scaled), b * 3.0);

        let mut dot = f32::NAN;
        assert_eq!(rivec_vector2_dot(ha, hb, &mut dot), OK);
        assert_eq!(dot, a.dot(b));

        // Operands are untouched by other threads' traffic.
        assert_eq!(read(ha), a);
        assert_eq!(read(hb), b);

        for h in [sum, unit, scaled, ha, hb] {
            assert_eq!(rivec_vector2_free(h), OK);
        }
        assert_eq!(
            rivec_vector2_free(sum),
            RivecStatus::InvalidHandle as i32,
            "second release must be reported"
        );
    }
}

#[test_log::test]
fn concurrent_callers_get_kernel_results_and_release_everything() {
    let start = live();

    let workers: Vec<_> = (0..THREADS)
        .map(|id| thread::spawn(move || worker(id)))
        .collect();
    for w in workers {
        w.join().expect("worker thread panicked");
    }

    assert_eq!(live(), start);
}
