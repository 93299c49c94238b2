//! Interpolation and motion: unclamped lerp, move-towards, smooth-damp.

use crate::vector2::Vector2;

/// Lower bound applied to `smooth_time` in [`Vector2::smooth_damp`].
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Output of one [`Vector2::smooth_damp`] step.
///
/// The caller's velocity is never updated in place; feed
/// [`velocity`](Self::velocity) into the next step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothDamp {
    /// New position.
    pub position: Vector2,
    /// Velocity to carry into the next step.
    pub velocity: Vector2,
}

impl Vector2 {
    /// `a + (b - a) * t` with `t` left unclamped.
    ///
    /// Values of `t` outside `[0, 1]` extrapolate along the line through `a`
    /// and `b`. Evaluated as `a * (1 - t) + b * t` in `f64`, so `t = 0`
    /// yields `a` and `t = 1` yields `b` exactly for any finite operands.
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        let t = t as f64;
        let s = 1.0 - t;
        Self::from_f64(
            a.x as f64 * s + b.x as f64 * t,
            a.y as f64 * s + b.y as f64 * t,
        )
    }

    /// Step `current` toward `target` by at most `max_delta`.
    ///
    /// Returns `target` itself whenever `current.distance(target)` is zero or
    /// at most `max_delta`.
    /// A negative `max_delta` moves away from `target`.
    pub fn move_towards(current: Self, target: Self, max_delta: f32) -> Self {
        let dx = target.x as f64 - current.x as f64;
        let dy = target.y as f64 - current.y as f64;
        let dist = (dx * dx + dy * dy).sqrt();
        // Reach is judged on the rounded value `distance` reports.
        let reach = dist as f32;
        if reach == 0.0 || reach <= max_delta {
            return target;
        }
        let k = max_delta as f64 / dist;
        Self::from_f64(current.x as f64 + dx * k, current.y as f64 + dy * k)
    }

    /// Critically damped spring step from `current` toward `target`.
    ///
    /// `smooth_time` is roughly the time to reach the target and is floored
    /// at [`MIN_SMOOTH_TIME`]. The spring decay uses the cubic approximation
    /// `1 / (1 + x + 0.48x² + 0.235x³)` of `e^-x`. If a step would carry the
    /// position past `target`, it lands on `target` with zero velocity.
    ///
    /// `max_speed` is accepted for call compatibility and not applied.
    pub fn smooth_damp(
        current: Self,
        target: Self,
        velocity: Self,
        smooth_time: f32,
        max_speed: f32,
        delta_time: f32,
    ) -> SmoothDamp {
        let _ = max_speed;
        // NaN is left to propagate rather than floored.
        let smooth_time = if smooth_time < MIN_SMOOTH_TIME {
            MIN_SMOOTH_TIME
        } else {
            smooth_time
        } as f64;
        let dt = delta_time as f64;

        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let step = |cur: f32, tgt: f32, vel: f32| -> (f64, f64) {
            let (cur, tgt, vel) = (cur as f64, tgt as f64, vel as f64);
            let change = cur - tgt;
            let temp = (vel + omega * change) * dt;
            let new_vel = (vel - omega * temp) * decay;
            let out = tgt + (change + temp) * decay;
            (out, new_vel)
        };
        let (px, vx) = step(current.x, target.x, velocity.x);
        let (py, vy) = step(current.y, target.y, velocity.y);

        let to_target = (
            target.x as f64 - current.x as f64,
            target.y as f64 - current.y as f64,
        );
        let past_target = (px - target.x as f64, py - target.y as f64);
        if to_target.0 * past_target.0 + to_target.1 * past_target.1 > 0.0 {
            return SmoothDamp {
                position: target,
                velocity: Vector2::ZERO,
            };
        }

        SmoothDamp {
            position: Self::from_f64(px, py),
            velocity: Self::from_f64(vx, vy),
        }
    }
}
