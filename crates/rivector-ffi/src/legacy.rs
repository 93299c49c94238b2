//! Pointer-based `Vector2_*` entry points of the legacy C++ library.
//!
//! Vectors here are heap objects owned through raw pointers, not handles.
//! Every pointer returned must be released exactly once with the matching
//! free function ([`Vector2_free`] or [`Vector2_free_list`]). Null pointers
//! are tolerated: frees ignore them and reads return NaN or null. Double
//! frees and dangling pointers cannot be detected here.
//!
//! Every operation takes a receiver pointer first, the way the Python
//! wrapper calls it. Where the wrapper passes its operands separately
//! (`dot`, `angle`, `equals`, `max`, `min` and the interpolation calls) the
//! receiver is kept for signature compatibility and never read. Vector
//! results are two-float arrays released with [`Vector2_free_list`].
//!
//! Operands are not screened by the input policy: this surface has no
//! status codes, so NaN simply propagates.

#![allow(non_snake_case)]

use rivector_core::Vector2;

/// Copy the vector behind `ptr`, or `None` for null.
#[allow(unsafe_code)]
fn read(ptr: *const Vector2) -> Option<Vector2> {
    // SAFETY: non-null pointers come from Vector2_new and are still live
    // per caller contract.
    unsafe { ptr.as_ref() }.copied()
}

/// Allocate a two-float array owned by the caller.
fn into_list(v: Vector2) -> *mut f32 {
    Box::into_raw(Box::new(v.to_array())).cast::<f32>()
}

/// [`into_list`] for a result that needs live operands; null otherwise.
fn list_or_null(v: Option<Vector2>) -> *mut f32 {
    v.map_or(std::ptr::null_mut(), into_list)
}

/// Allocate a vector. Release it with [`Vector2_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_new(x: f32, y: f32) -> *mut Vector2 {
    ffi_guard_or!(std::ptr::null_mut(), {
        Box::into_raw(Box::new(Vector2::new(x, y)))
    })
}

/// Release a vector from [`Vector2_new`]. Null is ignored.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_free(object: *mut Vector2) {
    if object.is_null() {
        return;
    }
    // SAFETY: object came from Box::into_raw in Vector2_new and has not
    // been freed per caller contract.
    drop(unsafe { Box::from_raw(object) });
}

/// x component; NaN for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_get_x(object: *const Vector2) -> f32 {
    read(object).map_or(f32::NAN, |v| v.x)
}

/// y component; NaN for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_get_y(object: *const Vector2) -> f32 {
    read(object).map_or(f32::NAN, |v| v.y)
}

/// Overwrite both components. Null is ignored.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_set(object: *mut Vector2, x: f32, y: f32) {
    // SAFETY: non-null pointers are live and not aliased mutably per
    // caller contract.
    if let Some(v) = unsafe { object.as_mut() } {
        v.set(x, y);
    }
}

/// `[x, y]` as a new array. Release with [`Vector2_free_list`]. Null in,
/// null out.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_to_list(object: *const Vector2) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(object))
    })
}

/// Release an array from [`Vector2_to_list`] or [`Vector2_normalized`].
/// Null is ignored.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_free_list(list: *mut f32) {
    if list.is_null() {
        return;
    }
    // SAFETY: list came from into_list, which boxed a [f32; 2].
    drop(unsafe { Box::from_raw(list.cast::<[f32; 2]>()) });
}

/// Length; NaN for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_magnitude(object: *const Vector2) -> f32 {
    ffi_guard_or!(f32::NAN, { read(object).map_or(f32::NAN, Vector2::magnitude) })
}

/// Squared length; NaN for null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_sqrmagnitude(object: *const Vector2) -> f32 {
    ffi_guard_or!(f32::NAN, {
        read(object).map_or(f32::NAN, Vector2::sqr_magnitude)
    })
}

/// Unit vector as a new array (`[0, 0]` for a zero vector). Release with
/// [`Vector2_free_list`]. Null in, null out.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_normalized(object: *const Vector2) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(object).map(Vector2::normalized))
    })
}

/// Dot product of `a` and `b`; NaN if either is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_dot(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> f32 {
    ffi_guard_or!(f32::NAN, {
        match (read(a), read(b)) {
            (Some(a), Some(b)) => a.dot(b),
            _ => f32::NAN,
        }
    })
}

/// Angle between `a` and `b` in radians; NaN if either is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_angle(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> f32 {
    ffi_guard_or!(f32::NAN, {
        match (read(a), read(b)) {
            (Some(a), Some(b)) => a.angle(b),
            _ => f32::NAN,
        }
    })
}

/// Exact component equality of `a` and `b`; false if either is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_equals(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> bool {
    ffi_guard_or!(false, {
        read(a).zip(read(b)).is_some_and(|(a, b)| a == b)
    })
}

/// Distance from `object` to `b`; NaN if either is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_distance(object: *const Vector2, b: *const Vector2) -> f32 {
    ffi_guard_or!(f32::NAN, {
        read(object)
            .zip(read(b))
            .map_or(f32::NAN, |(a, b)| a.distance(b))
    })
}

/// Signed angle from `object` to `b` in degrees; NaN if either is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_signed_angle(object: *const Vector2, b: *const Vector2) -> f32 {
    ffi_guard_or!(f32::NAN, {
        read(object)
            .zip(read(b))
            .map_or(f32::NAN, |(a, b)| a.signed_angle(b))
    })
}

/// `object` with its length limited to `max_length`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_clamp_magnitude(object: *const Vector2, max_length: f32) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(object).map(|v| v.clamp_magnitude(max_length)))
    })
}

/// Per-component maximum of `a` and `b`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_max(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(a).zip(read(b)).map(|(a, b)| a.max(b)))
    })
}

/// Per-component minimum of `a` and `b`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_min(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(a).zip(read(b)).map(|(a, b)| a.min(b)))
    })
}

/// `(-a.y, a.x)` as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_perpendicular(_object: *const Vector2, a: *const Vector2) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(a).map(Vector2::perpendicular))
    })
}

/// `a` scaled by `scale`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_scale(
    _object: *const Vector2,
    a: *const Vector2,
    scale: f32,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(a).map(|v| v.scale(scale)))
    })
}

/// `a` reflected off the plane with normal `b`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_reflect(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(read(a).zip(read(b)).map(|(v, normal)| v.reflect(normal)))
    })
}

/// `a + (b - a) * t`, unclamped, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_lerp_unclamped(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
    t: f32,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(
            read(a)
                .zip(read(b))
                .map(|(a, b)| Vector2::lerp_unclamped(a, b, t)),
        )
    })
}

/// `a` moved toward `b` by at most `max_distance_delta`, as a new array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_move_towards(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
    max_distance_delta: f32,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        list_or_null(
            read(a)
                .zip(read(b))
                .map(|(a, b)| Vector2::move_towards(a, b, max_distance_delta)),
        )
    })
}

/// One smooth-damp step from `a` toward `b` with velocity `c`, returning
/// the new position as a new array.
///
/// The new velocity is not reported and `c` is left unchanged; callers that
/// iterate should use `rivec_vector2_smooth_damp`. `max_speed` is accepted
/// and not applied.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn Vector2_smooth_damp(
    _object: *const Vector2,
    a: *const Vector2,
    b: *const Vector2,
    c: *const Vector2,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> *mut f32 {
    ffi_guard_or!(std::ptr::null_mut(), {
        let operands = read(a).zip(read(b)).zip(read(c));
        list_or_null(operands.map(|((current, target), velocity)| {
            Vector2::smooth_damp(current, target, velocity, smooth_time, max_speed, delta_time)
                .position
        }))
    })
}
