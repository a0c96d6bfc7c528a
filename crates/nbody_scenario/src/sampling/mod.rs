//! Sampling strategies for placing bodies inside a bounding box.
//!
//! This module defines the position sampling trait used by the scenario builder
//! and the uniform helpers shared by position and mass sampling.
use rand::RngCore;

use crate::scenario::body::Position;
use crate::scenario::bounds::BoundingBox;

pub mod uniform_random;

pub use uniform_random::UniformRandomSampling;

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    /// Draw one position inside `bounds`, edges included.
    fn sample(&self, bounds: &BoundingBox, rng: &mut dyn RngCore) -> Position;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 high bits fill the mantissa exactly.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random float between `a` and `b`, both included.
///
/// The bounds may be given in either order. Equal bounds return that value.
#[inline]
pub(crate) fn uniform(rng: &mut dyn RngCore, a: f64, b: f64) -> f64 {
    let u = rand01(rng);
    let value = a + (b - a) * u;
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value.clamp(lo, hi)
}
