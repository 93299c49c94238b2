//! Error type for operand screening.
//!
//! Kernel operations themselves are infallible. [`KernelError`] is only
//! produced by [`InputPolicy::Reject`](crate::InputPolicy::Reject) when an
//! operand is invalid without being a recognized degenerate case.

use std::error::Error;
use std::fmt;

/// An operand rejected before an operation ran.
#[derive(Clone, Debug, PartialEq)]
pub enum KernelError {
    /// A vector component or scalar operand is NaN or infinite.
    NonFinite {
        /// Name of the offending operand.
        operand: &'static str,
    },
    /// A length bound (`max_len`, `max_delta`) is negative.
    NegativeLength {
        /// Name of the offending operand.
        operand: &'static str,
        /// The value that was passed.
        value: f32,
    },
    /// A duration (`smooth_time`, `delta_time`) is negative.
    NegativeTime {
        /// Name of the offending operand.
        operand: &'static str,
        /// The value that was passed.
        value: f32,
    },
}

impl KernelError {
    /// Name of the operand that caused the rejection.
    pub fn operand(&self) -> &'static str {
        match self {
            Self::NonFinite { operand }
            | Self::NegativeLength { operand, .. }
            | Self::NegativeTime { operand, .. } => operand,
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { operand } => write!(f, "operand '{operand}' is not finite"),
            Self::NegativeLength { operand, value } => {
                write!(f, "length '{operand}' is negative: {value}")
            }
            Self::NegativeTime { operand, value } => {
                write!(f, "duration '{operand}' is negative: {value}")
            }
        }
    }
}

impl Error for KernelError {}
