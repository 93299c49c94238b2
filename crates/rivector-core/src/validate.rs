//! Operand screening ahead of kernel operations.
//!
//! The kernel evaluates every formula as written, so a NaN operand or a
//! negative length simply flows through to the result. [`InputPolicy`] lets
//! a caller choose to reject such operands up front instead. Degenerate
//! inputs (zero vectors, zero distance) are never rejected: they have
//! well-defined fallbacks.

use crate::error::KernelError;
use crate::vector2::Vector2;

/// How invalid-but-not-degenerate operands are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Evaluate the formula and let NaN/∞ propagate.
    #[default]
    Propagate,
    /// Reject non-finite operands and negative lengths or durations.
    Reject,
}

impl InputPolicy {
    fn rejects(self) -> bool {
        self == Self::Reject
    }

    /// Screen a vector operand for NaN/∞ components.
    pub fn check_vector(self, operand: &'static str, v: Vector2) -> Result<(), KernelError> {
        if self.rejects() && !v.is_finite() {
            return Err(KernelError::NonFinite { operand });
        }
        Ok(())
    }

    /// Screen a scalar operand for NaN/∞.
    pub fn check_scalar(self, operand: &'static str, value: f32) -> Result<(), KernelError> {
        if self.rejects() && !value.is_finite() {
            return Err(KernelError::NonFinite { operand });
        }
        Ok(())
    }

    /// Screen a length bound: finite and not negative.
    pub fn check_length(self, operand: &'static str, value: f32) -> Result<(), KernelError> {
        self.check_scalar(operand, value)?;
        if self.rejects() && value < 0.0 {
            return Err(KernelError::NegativeLength { operand, value });
        }
        Ok(())
    }

    /// Screen a duration: finite and not negative.
    pub fn check_time(self, operand: &'static str, value: f32) -> Result<(), KernelError> {
        self.check_scalar(operand, value)?;
        if self.rejects() && value < 0.0 {
            return Err(KernelError::NegativeTime { operand, value });
        }
        Ok(())
    }
}
