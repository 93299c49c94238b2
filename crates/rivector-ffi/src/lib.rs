//! C FFI bindings for the rivector 2D vector kernel.
//!
//! Every vector that crosses the boundary lives in a process-wide handle
//! table and is referred to by an opaque `u64` handle. Operations that
//! produce a vector store a fresh value and hand its handle to the caller,
//! who releases it exactly once with [`rivec_vector2_free`]. Stale, unknown
//! and already-released handles are reported as
//! [`RivecStatus::InvalidHandle`] rather than dereferenced.
//!
//! Entry points return an `i32` status (`0` on success, negative on error)
//! and write results through out-pointers. Panics never unwind into C.
//!
//! With the `legacy-abi` feature (on by default) the pointer-based
//! `Vector2_*` surface of the legacy C++ library is exported as well.
//!
//! This is the only crate in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
// Pointer validity is part of the C calling contract of each entry point.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an entry-point body, turning a panic into [`RivecStatus::Panicked`].
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $crate::status::RivecStatus::Panicked as i32
            }
        }
    };
}

/// Like [`ffi_guard!`] for entry points that return a plain value; a panic
/// yields `$fallback`.
#[cfg_attr(not(feature = "legacy-abi"), allow(unused_macros))]
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// Lock a mutex, returning [`RivecStatus::InternalError`] from the
/// enclosing entry point if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::error!("handle table lock poisoned");
                return $crate::status::RivecStatus::InternalError as i32;
            }
        }
    };
}

pub mod config;
mod handle;
#[cfg(feature = "legacy-abi")]
pub mod legacy;
pub mod logging;
pub mod ops;
pub mod status;
pub mod types;
pub mod vector;

pub use config::{rivec_config_input_policy, rivec_config_set_input_policy};
pub use logging::rivec_logging_init;
pub use status::RivecStatus;
pub use types::{RivecInputPolicy, RivecLogLevel};
pub use vector::{
    rivec_live_vectors, rivec_vector2_free, rivec_vector2_get_x, rivec_vector2_get_y,
    rivec_vector2_new, rivec_vector2_set, rivec_vector2_to_list, RIVEC_NULL_HANDLE,
};
