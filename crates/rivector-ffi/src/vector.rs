//! Vector lifecycle FFI: create, read, overwrite, copy out, release.
//!
//! All vectors live in one global [`HandleTable`]. The table lock is held
//! only for a single lookup, insert or removal; kernel math runs on copies
//! after the lock is dropped.

use std::sync::Mutex;

use rivector_core::Vector2;
use tracing::{error, trace, warn};

use crate::handle::HandleTable;
use crate::status::RivecStatus;

/// Handle value that never refers to a vector.
pub const RIVEC_NULL_HANDLE: u64 = 0;

static VECTORS: Mutex<HandleTable<Vector2>> = Mutex::new(HandleTable::new());

/// Copy the vector behind `handle` out of the table.
pub(crate) fn load(handle: u64) -> Result<Vector2, RivecStatus> {
    let table = VECTORS.lock().map_err(|_| {
        error!("handle table lock poisoned");
        RivecStatus::InternalError
    })?;
    table.get(handle).copied().ok_or_else(|| {
        warn!(handle, "unknown or released vector handle");
        RivecStatus::InvalidHandle
    })
}

/// Store a new vector and return the owning handle.
pub(crate) fn store(v: Vector2) -> Result<u64, RivecStatus> {
    let mut table = VECTORS.lock().map_err(|_| {
        error!("handle table lock poisoned");
        RivecStatus::InternalError
    })?;
    let handle = table.insert(v);
    trace!(handle, x = v.x, y = v.y, "vector allocated");
    Ok(handle)
}

/// Report a null out-pointer passed to `entry`.
pub(crate) fn null_out(entry: &'static str) -> i32 {
    warn!(entry, "null out-pointer");
    RivecStatus::InvalidArgument as i32
}

/// Create a vector with components `(x, y)` and write its handle to `out`.
///
/// Any `f32` is accepted, NaN and infinities included. The caller owns the
/// handle and must release it with [`rivec_vector2_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_new(x: f32, y: f32, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return null_out("rivec_vector2_new");
        }
        let handle = match store(Vector2::new(x, y)) {
            Ok(h) => h,
            Err(s) => return s as i32,
        };
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = handle };
        RivecStatus::Ok as i32
    })
}

/// Release a vector handle obtained from any `rivec_*` entry point.
///
/// Releasing the same handle twice, or a handle this library never issued,
/// returns `InvalidHandle` and has no other effect.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_free(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(VECTORS).remove(handle) {
            Some(_) => {
                trace!(handle, "vector released");
                RivecStatus::Ok as i32
            }
            None => {
                warn!(handle, "release of unknown or already released handle");
                RivecStatus::InvalidHandle as i32
            }
        }
    })
}

/// Read one component of the vector behind `handle` into `out`.
#[allow(unsafe_code)]
fn read_component(
    entry: &'static str,
    handle: u64,
    out: *mut f32,
    pick: fn(Vector2) -> f32,
) -> i32 {
    if out.is_null() {
        return null_out(entry);
    }
    match load(handle) {
        Ok(v) => {
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = pick(v) };
            RivecStatus::Ok as i32
        }
        Err(s) => s as i32,
    }
}

/// Write the x component of a vector to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_get_x(handle: u64, out: *mut f32) -> i32 {
    ffi_guard!({ read_component("rivec_vector2_get_x", handle, out, |v| v.x) })
}

/// Write the y component of a vector to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_get_y(handle: u64, out: *mut f32) -> i32 {
    ffi_guard!({ read_component("rivec_vector2_get_y", handle, out, |v| v.y) })
}

/// Overwrite both components of an existing vector in place.
///
/// This is the only entry point that mutates a vector. Results previously
/// derived from the vector are separate values and are not affected.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_set(handle: u64, x: f32, y: f32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(VECTORS);
        match table.get_mut(handle) {
            Some(v) => {
                v.set(x, y);
                RivecStatus::Ok as i32
            }
            None => {
                warn!(handle, "set on unknown or released handle");
                RivecStatus::InvalidHandle as i32
            }
        }
    })
}

/// Copy `[x, y]` into a caller-allocated buffer of `cap` floats.
///
/// Returns `BufferTooSmall` if `cap < 2`, without writing anything.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_vector2_to_list(handle: u64, buf: *mut f32, cap: usize) -> i32 {
    ffi_guard!({
        if buf.is_null() {
            return null_out("rivec_vector2_to_list");
        }
        if cap < 2 {
            return RivecStatus::BufferTooSmall as i32;
        }
        let v = match load(handle) {
            Ok(v) => v,
            Err(s) => return s as i32,
        };
        let components = v.to_array();
        // SAFETY: buf points to at least cap >= 2 writable f32 values.
        unsafe {
            std::ptr::copy_nonoverlapping(components.as_ptr(), buf, components.len());
        }
        RivecStatus::Ok as i32
    })
}

/// Number of vector handles currently live (allocated and not released).
///
/// Intended for leak checks in host test-suites.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_live_vectors(out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return null_out("rivec_live_vectors");
        }
        let live = ffi_lock!(VECTORS).len() as u64;
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = live };
        RivecStatus::Ok as i32
    })
}
