//! Integration test: ownership across the C boundary.
//!
//! Every vector-returning entry point must hand back a fresh handle that
//! the caller can release on its own schedule without disturbing operands
//! or other results. Misuse (double release, stale handles) must be
//! reported, never dereferenced.

use proptest::prelude::*;
use rivector_core::Vector2;
use rivector_ffi::ops::*;
use rivector_ffi::{
    rivec_vector2_free, rivec_vector2_new, rivec_vector2_set, rivec_vector2_to_list, RivecStatus,
};
use rivector_test_utils::{arb_length, arb_vector2, assert_vec_close, fixtures};

const OK: i32 = RivecStatus::Ok as i32;
const INVALID_HANDLE: i32 = RivecStatus::InvalidHandle as i32;

fn alloc(v: Vector2) -> u64 {
    let mut h = 0;
    assert_eq!(rivec_vector2_new(v.x, v.y, &mut h), OK);
    h
}

fn read(h: u64) -> Vector2 {
    let mut buf = [0.0f32; 2];
    assert_eq!(rivec_vector2_to_list(h, buf.as_mut_ptr(), buf.len()), OK);
    Vector2::from(buf)
}

fn release(h: u64) {
    assert_eq!(rivec_vector2_free(h), OK);
}

type BinaryOp = extern "C" fn(u64, u64, *mut u64) -> i32;

/// Every binary vector-returning entry point, for table-driven checks.
fn binary_ops() -> [(&'static str, BinaryOp); 5] {
    [
        ("max", rivec_vector2_max as BinaryOp),
        ("min", rivec_vector2_min as BinaryOp),
        ("add", rivec_vector2_add as BinaryOp),
        ("sub", rivec_vector2_sub as BinaryOp),
        ("reflect", rivec_vector2_reflect as BinaryOp),
    ]
}

#[test_log::test]
fn results_are_distinct_from_operands() {
    let a = alloc(Vector2::new(1.0, 2.0));
    let b = alloc(Vector2::new(1.0, 2.0));

    for (name, op) in binary_ops() {
        let mut out = 0;
        assert_eq!(op(a, b, &mut out), OK, "{name}");
        assert_ne!(out, a, "{name} returned an operand handle");
        assert_ne!(out, b, "{name} returned an operand handle");
        release(out);
    }

    let mut out = 0;
    assert_eq!(rivec_vector2_move_towards(a, b, 10.0, &mut out), OK);
    assert_ne!(out, b, "move_towards must copy a reachable target");
    release(out);

    assert_eq!(read(a), Vector2::new(1.0, 2.0));
    assert_eq!(read(b), Vector2::new(1.0, 2.0));
    release(a);
    release(b);
}

#[test_log::test]
fn results_outlive_their_operands() {
    let v = alloc(Vector2::new(3.0, 4.0));
    let mut unit = 0;
    let mut perp = 0;
    assert_eq!(rivec_vector2_normalized(v, &mut unit), OK);
    assert_eq!(rivec_vector2_perpendicular(v, &mut perp), OK);

    release(v);
    assert_eq!(read(unit), Vector2::new(0.6, 0.8));
    assert_eq!(read(perp), Vector2::new(-4.0, 3.0));

    // Results are independent of each other too.
    release(unit);
    assert_eq!(read(perp), Vector2::new(-4.0, 3.0));
    release(perp);
}

#[test_log::test]
fn set_does_not_reach_earlier_results() {
    let v = alloc(Vector2::new(10.0, 10.0));
    let mut neg = 0;
    assert_eq!(rivec_vector2_negate(v, &mut neg), OK);
    assert_eq!(rivec_vector2_set(v, 15.0, 20.0), OK);
    assert_eq!(read(v), Vector2::new(15.0, 20.0));
    assert_eq!(read(neg), Vector2::new(-10.0, -10.0));
    release(v);
    release(neg);
}

#[test_log::test]
fn double_release_is_reported_not_fatal() {
    let v = alloc(Vector2::new(1.0, 1.0));
    let mut out = 0;
    assert_eq!(rivec_vector2_scale(v, 3.0, &mut out), OK);
    release(out);
    assert_eq!(rivec_vector2_free(out), INVALID_HANDLE);

    // The operand is still fine.
    assert_eq!(read(v), Vector2::new(1.0, 1.0));
    release(v);
    assert_eq!(rivec_vector2_free(v), INVALID_HANDLE);

    let mut f = 0.0f32;
    assert_eq!(rivec_vector2_magnitude(v, &mut f), INVALID_HANDLE);
}

#[test_log::test]
fn smooth_damp_velocity_threads_through_steps() {
    let current = alloc(Vector2::ZERO);
    let target = alloc(Vector2::new(10.0, 0.0));
    let mut position = current;
    let mut velocity = alloc(Vector2::ZERO);

    for _ in 0..500 {
        let mut next_position = 0;
        let mut next_velocity = 0;
        assert_eq!(
            rivec_vector2_smooth_damp(
                position,
                target,
                velocity,
                0.3,
                100.0,
                0.02,
                &mut next_position,
                &mut next_velocity,
            ),
            OK
        );
        release(position);
        release(velocity);
        position = next_position;
        velocity = next_velocity;
    }

    assert_vec_close(read(position), Vector2::new(10.0, 0.0), 1e-3);
    release(position);
    release(velocity);
    release(target);
}

#[test_log::test]
fn reference_fixtures_over_handles() {
    let base = alloc(fixtures::BASE);
    let other = alloc(fixtures::ANGLE_OTHER);
    let target = alloc(fixtures::MOVE_TARGET);
    let normal = alloc(fixtures::REFLECT_NORMAL);

    let mut angle = 0.0f32;
    assert_eq!(rivec_vector2_angle(base, other, &mut angle), OK);
    assert!((angle - fixtures::ANGLE_EXPECTED).abs() < 1e-5);

    let mut out = 0;
    assert_eq!(
        rivec_vector2_clamp_magnitude(base, fixtures::CLAMP_MAX, &mut out),
        OK
    );
    assert_vec_close(read(out), fixtures::CLAMP_EXPECTED, 1e-6);
    release(out);

    assert_eq!(
        rivec_vector2_move_towards(base, target, fixtures::MOVE_MAX_DELTA, &mut out),
        OK
    );
    assert_vec_close(read(out), fixtures::MOVE_EXPECTED, 1e-6);
    release(out);

    assert_eq!(rivec_vector2_reflect(base, normal, &mut out), OK);
    assert_eq!(read(out), fixtures::REFLECT_EXPECTED);
    release(out);

    for h in [base, other, target, normal] {
        release(h);
    }
}

proptest! {
    #[test]
    fn operands_survive_any_binary_op(a in arb_vector2(), b in arb_vector2()) {
        let ha = alloc(a);
        let hb = alloc(b);
        for (name, op) in binary_ops() {
            let mut out = 0;
            prop_assert_eq!(op(ha, hb, &mut out), OK, "{}", name);
            release(out);
            prop_assert_eq!(read(ha), a);
            prop_assert_eq!(read(hb), b);
        }
        release(ha);
        release(hb);
    }

    #[test]
    fn move_towards_result_is_owned(
        a in arb_vector2(),
        b in arb_vector2(),
        max_delta in arb_length(),
    ) {
        let ha = alloc(a);
        let hb = alloc(b);
        let mut out = 0;
        prop_assert_eq!(rivec_vector2_move_towards(ha, hb, max_delta, &mut out), OK);
        release(out);
        prop_assert_eq!(read(hb), b);
        release(ha);
        release(hb);
    }
}
