//! Kernel operations exposed over the C boundary.
//!
//! Scalar results are written to a caller-provided out-pointer and allocate
//! nothing. Vector results are stored as new, independently owned vectors
//! and their handle is written to `out`; operand handles are only read.
//! Operands are screened by the current input policy before the kernel
//! runs; a rejected call allocates nothing.

use rivector_core::{InputPolicy, SmoothDamp, Vector2};

use crate::config::{input_policy, rejected};
use crate::status::RivecStatus;
use crate::vector::{load, null_out, rivec_vector2_free, store};

/// Resolve an operand handle and screen its value.
fn operand(name: &'static str, handle: u64, policy: InputPolicy) -> Result<Vector2, RivecStatus> {
    let v = load(handle)?;
    policy.check_vector(name, v).map_err(rejected)?;
    Ok(v)
}

/// Run `compute` and write its result to `out`.
#[allow(unsafe_code)]
fn emit<T>(
    entry: &'static str,
    out: *mut T,
    compute: impl FnOnce(InputPolicy) -> Result<T, RivecStatus>,
) -> i32 {
    if out.is_null() {
        return null_out(entry);
    }
    match compute(input_policy()) {
        Ok(value) => {
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = value };
            RivecStatus::Ok as i32
        }
        Err(status) => status as i32,
    }
}

/// Run `compute`, store the resulting vector and write its handle to `out`.
fn emit_vector(
    entry: &'static str,
    out: *mut u64,
    compute: impl FnOnce(InputPolicy) -> Result<Vector2, RivecStatus>,
) -> i32 {
    emit(entry, out, |policy| store(compute(policy)?))
}

// ── Scalar results ──────────────────────────────────────────────

/// Length of a vector.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_magnitude(handle: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_magnitude", out, |p| {
            Ok(operand("v", handle, p)?.magnitude())
        })
    })
}

/// Squared length of a vector.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_sqr_magnitude(handle: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_sqr_magnitude", out, |p| {
            Ok(operand("v", handle, p)?.sqr_magnitude())
        })
    })
}

/// Dot product of `a` and `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_dot(a: u64, b: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_dot", out, |p| {
            Ok(operand("a", a, p)?.dot(operand("b", b, p)?))
        })
    })
}

/// Unsigned angle between `a` and `b` in radians; 0 if either is zero.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_angle(a: u64, b: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_angle", out, |p| {
            Ok(operand("a", a, p)?.angle(operand("b", b, p)?))
        })
    })
}

/// Signed angle from `a` to `b` in degrees, within (-180, 180]; 0 if
/// either is zero.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_signed_angle(a: u64, b: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_signed_angle", out, |p| {
            Ok(operand("a", a, p)?.signed_angle(operand("b", b, p)?))
        })
    })
}

/// Distance between points `a` and `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_distance(a: u64, b: u64, out: *mut f32) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_distance", out, |p| {
            Ok(operand("a", a, p)?.distance(operand("b", b, p)?))
        })
    })
}

/// Exact component equality. Writes 1 if equal, 0 otherwise.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_equals(a: u64, b: u64, out: *mut u8) -> i32 {
    ffi_guard!({
        emit("rivec_vector2_equals", out, |p| {
            Ok(u8::from(operand("a", a, p)? == operand("b", b, p)?))
        })
    })
}

// ── Vector results ──────────────────────────────────────────────

/// Unit vector in the direction of `handle`; `(0, 0)` for a zero vector.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_normalized(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_normalized", out, |p| {
            Ok(operand("v", handle, p)?.normalized())
        })
    })
}

/// `(-y, x)`: the vector rotated 90° counter-clockwise.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_perpendicular(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_perpendicular", out, |p| {
            Ok(operand("v", handle, p)?.perpendicular())
        })
    })
}

/// `(-x, -y)`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_negate(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_negate", out, |p| Ok(-operand("v", handle, p)?))
    })
}

/// Both components multiplied by `s`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_scale(handle: u64, s: f32, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_scale", out, |p| {
            let v = operand("v", handle, p)?;
            p.check_scalar("s", s).map_err(rejected)?;
            Ok(v.scale(s))
        })
    })
}

/// Copy of the vector with its length limited to `max_len`; `(0, 0)` for a
/// zero vector.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_clamp_magnitude(handle: u64, max_len: f32, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_clamp_magnitude", out, |p| {
            let v = operand("v", handle, p)?;
            p.check_length("max_len", max_len).map_err(rejected)?;
            Ok(v.clamp_magnitude(max_len))
        })
    })
}

/// Per-component maximum of `a` and `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_max(a: u64, b: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_max", out, |p| {
            Ok(operand("a", a, p)?.max(operand("b", b, p)?))
        })
    })
}

/// Per-component minimum of `a` and `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_min(a: u64, b: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_min", out, |p| {
            Ok(operand("a", a, p)?.min(operand("b", b, p)?))
        })
    })
}

/// `a + b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_add(a: u64, b: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_add", out, |p| {
            Ok(operand("a", a, p)? + operand("b", b, p)?)
        })
    })
}

/// `a - b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_sub(a: u64, b: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_sub", out, |p| {
            Ok(operand("a", a, p)? - operand("b", b, p)?)
        })
    })
}

/// Reflect the vector off the plane with the given `normal`.
///
/// `normal` should be unit length; it is never renormalized or checked.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_reflect(handle: u64, normal: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_reflect", out, |p| {
            Ok(operand("v", handle, p)?.reflect(operand("normal", normal, p)?))
        })
    })
}

/// `a + (b - a) * t`, with `t` unclamped.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_lerp_unclamped(a: u64, b: u64, t: f32, out: *mut u64) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_lerp_unclamped", out, |p| {
            let a = operand("a", a, p)?;
            let b = operand("b", b, p)?;
            p.check_scalar("t", t).map_err(rejected)?;
            Ok(Vector2::lerp_unclamped(a, b, t))
        })
    })
}

/// Step `current` toward `target` by at most `max_delta`.
///
/// When `target` is within reach the result is a new vector equal to
/// `target`, never the `target` handle itself.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_move_towards(
    current: u64,
    target: u64,
    max_delta: f32,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        emit_vector("rivec_vector2_move_towards", out, |p| {
            let current = operand("current", current, p)?;
            let target = operand("target", target, p)?;
            p.check_length("max_delta", max_delta).map_err(rejected)?;
            Ok(Vector2::move_towards(current, target, max_delta))
        })
    })
}

fn smooth_damp_step(
    current: u64,
    target: u64,
    velocity: u64,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
    p: InputPolicy,
) -> Result<SmoothDamp, RivecStatus> {
    let current = operand("current", current, p)?;
    let target = operand("target", target, p)?;
    let velocity = operand("velocity", velocity, p)?;
    p.check_time("smooth_time", smooth_time).map_err(rejected)?;
    p.check_scalar("max_speed", max_speed).map_err(rejected)?;
    p.check_time("delta_time", delta_time).map_err(rejected)?;
    Ok(Vector2::smooth_damp(
        current,
        target,
        velocity,
        smooth_time,
        max_speed,
        delta_time,
    ))
}

/// One critically damped spring step from `current` toward `target`.
///
/// Writes the new position handle to `out_position`. If `out_velocity` is
/// non-null, the velocity to feed into the next step is stored as a second
/// owned vector and its handle written there; the `velocity` operand itself
/// is not modified. `max_speed` is accepted but not applied.
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn rivec_vector2_smooth_damp(
    current: u64,
    target: u64,
    velocity: u64,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
    out_position: *mut u64,
    out_velocity: *mut u64,
) -> i32 {
    ffi_guard!({
        if out_position.is_null() {
            return null_out("rivec_vector2_smooth_damp");
        }
        let step = match smooth_damp_step(
            current,
            target,
            velocity,
            smooth_time,
            max_speed,
            delta_time,
            input_policy(),
        ) {
            Ok(step) => step,
            Err(s) => return s as i32,
        };
        let position = match store(step.position) {
            Ok(h) => h,
            Err(s) => return s as i32,
        };
        if !out_velocity.is_null() {
            match store(step.velocity) {
                // SAFETY: out_velocity is non-null and valid per caller contract.
                Ok(h) => unsafe { *out_velocity = h },
                Err(s) => {
                    rivec_vector2_free(position);
                    return s as i32;
                }
            }
        }
        // SAFETY: out_position is non-null and valid per caller contract.
        unsafe { *out_position = position };
        RivecStatus::Ok as i32
    })
}
