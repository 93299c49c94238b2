//! Process-wide adapter configuration.
//!
//! The only runtime setting is the [`InputPolicy`] applied to operands
//! before they reach the kernel. It defaults to
//! [`InputPolicy::Propagate`], which keeps results bit-identical to the
//! plain formulas.

use std::sync::atomic::{AtomicI32, Ordering};

use rivector_core::{InputPolicy, KernelError};
use tracing::{debug, info, warn};

use crate::status::RivecStatus;
use crate::types::RivecInputPolicy;

static INPUT_POLICY: AtomicI32 = AtomicI32::new(RivecInputPolicy::Propagate as i32);

/// The policy currently in force.
pub(crate) fn input_policy() -> InputPolicy {
    RivecInputPolicy::from_raw(INPUT_POLICY.load(Ordering::Relaxed))
        .map(InputPolicy::from)
        .unwrap_or_default()
}

/// Map a screening failure to its status, logging the rejected operand.
pub(crate) fn rejected(e: KernelError) -> RivecStatus {
    debug!(operand = e.operand(), error = %e, "operand rejected by input policy");
    RivecStatus::from(&e)
}

/// Select how invalid operands are treated from now on.
///
/// `policy` is a `RivecInputPolicy` value. Affects calls on all threads.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_config_set_input_policy(policy: i32) -> i32 {
    ffi_guard!({
        let Some(parsed) = RivecInputPolicy::from_raw(policy) else {
            warn!(policy, "unknown input policy");
            return RivecStatus::InvalidArgument as i32;
        };
        INPUT_POLICY.store(parsed as i32, Ordering::Relaxed);
        info!(policy = ?parsed, "input policy set");
        RivecStatus::Ok as i32
    })
}

/// Read the current input policy into `out` as a `RivecInputPolicy` value.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_config_input_policy(out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return RivecStatus::InvalidArgument as i32;
        }
        let current = RivecInputPolicy::from(input_policy());
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = current as i32 };
        RivecStatus::Ok as i32
    })
}

/// Serializes unit tests that change or depend on the global policy.
#[cfg(test)]
pub(crate) static POLICY_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
