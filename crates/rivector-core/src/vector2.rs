//! The [`Vector2`] value type and its geometric operations.
//!
//! Components are `f32`. Operations that divide by a magnitude or take a
//! square root widen to `f64` internally and round the final result back to
//! `f32`, so intermediate `x² + y²` cannot overflow for any finite input.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A two-component vector in a Y-up frame.
///
/// Equality is exact: two vectors are equal only if both components compare
/// equal as `f32`. A vector with a NaN component is not equal to itself.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round a pair of `f64` components to a `Vector2`.
    pub(crate) fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x as f32, y as f32)
    }

    /// Overwrite both components in place.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Components as `[x, y]`.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// `true` if neither component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn sqr_magnitude_f64(self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        x * x + y * y
    }

    pub(crate) fn magnitude_f64(self) -> f64 {
        self.sqr_magnitude_f64().sqrt()
    }

    /// Squared length `x² + y²`, without the square root.
    pub fn sqr_magnitude(self) -> f32 {
        self.sqr_magnitude_f64() as f32
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.magnitude_f64() as f32
    }

    /// Unit vector in the same direction, or [`ZERO`](Self::ZERO) when the
    /// magnitude is zero.
    pub fn normalized(self) -> Self {
        let mag = self.magnitude_f64();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::from_f64(self.x as f64 / mag, self.y as f64 / mag)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unsigned angle between two vectors, in radians, within `[0, π]`.
    ///
    /// Returns `0.0` if either vector has zero magnitude. The cosine is
    /// clamped to `[-1, 1]` before `acos` so rounding cannot push it out of
    /// the domain.
    pub fn angle(self, other: Self) -> f32 {
        let mag_a = self.magnitude_f64();
        let mag_b = other.magnitude_f64();
        if mag_a == 0.0 || mag_b == 0.0 {
            return 0.0;
        }
        let dot = self.x as f64 * other.x as f64 + self.y as f64 * other.y as f64;
        let cosine = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);
        cosine.acos() as f32
    }

    /// Signed angle from `self` to `other`, in degrees, within `(-180, 180]`.
    ///
    /// Positive is counter-clockwise. Returns `0.0` if either vector is
    /// exactly `(0, 0)`.
    pub fn signed_angle(self, other: Self) -> f32 {
        if self == Self::ZERO || other == Self::ZERO {
            return 0.0;
        }
        let from = (self.y as f64).atan2(self.x as f64);
        let to = (other.y as f64).atan2(other.x as f64);
        let mut delta = to - from;
        if delta > PI {
            delta -= TAU;
        } else if delta <= -PI {
            delta += TAU;
        }
        let degrees = delta.to_degrees() as f32;
        // Rounding to f32 can land a value just above -π on -180.
        if degrees <= -180.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt() as f32
    }

    /// Copy of `self` with its length limited to `max_len`.
    ///
    /// A zero vector stays `(0, 0)` whatever `max_len` is. `max_len` is not
    /// validated: a negative bound scales the vector through the origin.
    pub fn clamp_magnitude(self, max_len: f32) -> Self {
        let mag = self.magnitude_f64();
        if mag == 0.0 {
            return Self::ZERO;
        }
        let max_len = max_len as f64;
        if mag > max_len {
            let k = max_len / mag;
            Self::from_f64(self.x as f64 * k, self.y as f64 * k)
        } else {
            self
        }
    }

    /// Multiply both components by `s`.
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Per-component maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Per-component minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Rotate 90° counter-clockwise: `(-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Reflect `self` off the plane defined by `normal`.
    ///
    /// `normal` is expected to be unit length and is used as given.
    pub fn reflect(self, normal: Self) -> Self {
        let factor = -2.0 * normal.dot(self);
        Self::new(factor * normal.x + self.x, factor * normal.y + self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div for Vector2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}
