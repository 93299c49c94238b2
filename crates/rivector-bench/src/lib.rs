//! Benchmark inputs for the rivector kernel.
//!
//! Inputs are generated from a seeded ChaCha8 RNG so that runs on
//! different machines, and successive runs on one machine, measure the
//! same work.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rivector_core::Vector2;

/// Components are drawn from `[-EXTENT, EXTENT)`.
pub const EXTENT: f32 = 1000.0;

/// `n` deterministic vector pairs for binary-operation benchmarks.
///
/// Roughly one pair in sixteen has a zero first operand, so the degenerate
/// fallbacks are measured alongside the main formulas.
pub fn sample_pairs(seed: u64, n: usize) -> Vec<(Vector2, Vector2)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let a = if rng.random_range(0..16) == 0 {
                Vector2::ZERO
            } else {
                sample_vector(&mut rng)
            };
            (a, sample_vector(&mut rng))
        })
        .collect()
}

/// `n` deterministic non-negative scalars in `[0, EXTENT)`, for lengths,
/// deltas and blend factors.
pub fn sample_scalars(seed: u64, n: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0.0..EXTENT)).collect()
}

fn sample_vector(rng: &mut ChaCha8Rng) -> Vector2 {
    Vector2::new(
        rng.random_range(-EXTENT..EXTENT),
        rng.random_range(-EXTENT..EXTENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_pairs_deterministic() {
        assert_eq!(sample_pairs(42, 100), sample_pairs(42, 100));
        assert_ne!(sample_pairs(42, 100), sample_pairs(43, 100));
    }

    #[test]
    fn samples_stay_in_range() {
        for (a, b) in sample_pairs(7, 1000) {
            for c in [a.x, a.y, b.x, b.y] {
                assert!((-EXTENT..EXTENT).contains(&c), "{c} out of range");
            }
        }
        for s in sample_scalars(7, 1000) {
            assert!((0.0..EXTENT).contains(&s));
        }
    }

    #[test]
    fn sample_pairs_include_zero_operands() {
        let zeros = sample_pairs(1, 1000)
            .iter()
            .filter(|(a, _)| *a == Vector2::ZERO)
            .count();
        assert!(zeros > 0 && zeros < 200, "{zeros} zero operands");
    }
}
