//! C-compatible status codes.
//!
//! [`RivecStatus`] is the `i32` every entry point returns. Kernel operand
//! rejections ([`KernelError`]) convert into it.

use rivector_core::KernelError;

/// Status code returned by FFI entry points.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RivecStatus {
    /// Success.
    Ok = 0,
    /// Handle is unknown, stale, or was already released.
    InvalidHandle = -1,
    /// An out-pointer is null or an enum argument is out of range.
    InvalidArgument = -2,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -3,
    /// An operand is NaN or infinite (reject policy only).
    NonFiniteOperand = -4,
    /// A length bound is negative (reject policy only).
    NegativeLength = -5,
    /// A duration is negative (reject policy only).
    NegativeTime = -6,
    /// Internal error (e.g. poisoned lock after a prior panic).
    InternalError = -20,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&KernelError> for RivecStatus {
    fn from(e: &KernelError) -> Self {
        match e {
            KernelError::NonFinite { .. } => RivecStatus::NonFiniteOperand,
            KernelError::NegativeLength { .. } => RivecStatus::NegativeLength,
            KernelError::NegativeTime { .. } => RivecStatus::NegativeTime,
        }
    }
}
