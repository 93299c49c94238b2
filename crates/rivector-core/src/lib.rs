//! 2D vector math kernel.
//!
//! This is the leaf crate of the workspace. It defines the [`Vector2`] value
//! type and every geometric operation the C boundary exposes, each with an
//! explicit fallback for degenerate inputs (zero-length vectors, zero
//! distance) instead of a division-by-zero NaN.
//!
//! Operations never fail. Inputs that are invalid but not degenerate
//! (negative lengths, non-finite operands) are evaluated as written unless a
//! caller screens them first with an [`InputPolicy`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod interp;
pub mod validate;
pub mod vector2;

pub use error::KernelError;
pub use interp::{SmoothDamp, MIN_SMOOTH_TIME};
pub use validate::InputPolicy;
pub use vector2::Vector2;
