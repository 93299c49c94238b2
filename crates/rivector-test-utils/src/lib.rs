//! Test utilities for rivector development.
//!
//! Provides `proptest` strategies over [`Vector2`], tolerance-based
//! comparison helpers (the kernel's own equality is exact) and the
//! reference fixtures from the legacy Python test-suite.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use rivector_core::Vector2;

/// Component magnitude bound used by the default strategies.
///
/// Keeps `x² + y²` and cross-operand ratios comfortably inside `f32` so
/// that properties stated "within epsilon" stay meaningful.
pub const COMPONENT_BOUND: f32 = 1.0e4;

/// A finite component in `[-COMPONENT_BOUND, COMPONENT_BOUND)`.
pub fn arb_component() -> impl Strategy<Value = f32> {
    -COMPONENT_BOUND..COMPONENT_BOUND
}

/// A finite vector, zero included.
pub fn arb_vector2() -> impl Strategy<Value = Vector2> {
    (arb_component(), arb_component()).prop_map(|(x, y)| Vector2::new(x, y))
}

/// A vector with magnitude of at least `1e-3`, so direction is well defined.
pub fn arb_nonzero_vector2() -> impl Strategy<Value = Vector2> {
    arb_vector2().prop_filter("non-degenerate direction", |v| v.magnitude() >= 1e-3)
}

/// A non-negative length bound.
pub fn arb_length() -> impl Strategy<Value = f32> {
    0.0f32..2.0 * COMPONENT_BOUND
}

/// Relative-or-absolute closeness: `|a - b| <= eps * max(1, |a|, |b|)`.
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    let scale = 1.0f32.max(a.abs()).max(b.abs());
    (a - b).abs() <= eps * scale
}

/// Component-wise [`approx_eq`].
pub fn approx_eq_vec(a: Vector2, b: Vector2, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Panic with both vectors printed unless they are [`approx_eq_vec`].
#[track_caller]
pub fn assert_vec_close(actual: Vector2, expected: Vector2, eps: f32) {
    assert!(
        approx_eq_vec(actual, expected, eps),
        "expected {expected}, got {actual} (eps {eps})"
    );
}

/// Reference inputs and outputs carried over from the legacy Python
/// test-suite. Expected values were produced by the single-precision
/// implementation and are compared with a tolerance.
pub mod fixtures {
    use rivector_core::Vector2;

    /// The receiver vector every legacy test started from.
    pub const BASE: Vector2 = Vector2::new(10.0, 10.0);

    /// `angle(BASE, (221, 24))`.
    pub const ANGLE_OTHER: Vector2 = Vector2::new(221.0, 24.0);
    pub const ANGLE_EXPECTED: f32 = 0.677_224_755_287_170_4;

    /// `signed_angle((35, 10), (5, 20))` in degrees.
    pub const SIGNED_FROM: Vector2 = Vector2::new(35.0, 10.0);
    pub const SIGNED_TO: Vector2 = Vector2::new(5.0, 20.0);
    pub const SIGNED_EXPECTED: f32 = 60.018_360_137_939_45;

    /// `clamp_magnitude(BASE, 5)`.
    pub const CLAMP_MAX: f32 = 5.0;
    pub const CLAMP_EXPECTED: Vector2 = Vector2::new(3.535_533_905_029_297, 3.535_533_905_029_297);

    /// `move_towards(BASE, (15, 15), 5)`.
    pub const MOVE_TARGET: Vector2 = Vector2::new(15.0, 15.0);
    pub const MOVE_MAX_DELTA: f32 = 5.0;
    pub const MOVE_EXPECTED: Vector2 =
        Vector2::new(13.535_533_905_029_297, 13.535_533_905_029_297);

    /// `reflect(BASE, (1, 0))`.
    pub const REFLECT_NORMAL: Vector2 = Vector2::RIGHT;
    pub const REFLECT_EXPECTED: Vector2 = Vector2::new(-10.0, 10.0);
}
