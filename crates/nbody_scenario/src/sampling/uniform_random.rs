//! Uniform random position sampling strategy.
use rand::RngCore;

use crate::sampling::{uniform, PositionSampling};
use crate::scenario::body::Position;
use crate::scenario::bounds::BoundingBox;

/// Uniform i.i.d. random sampling over a rectangular domain.
///
/// Draws x first, then y, each uniformly between the box edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandomSampling;

impl UniformRandomSampling {
    pub fn new() -> Self {
        Self
    }
}

impl PositionSampling for UniformRandomSampling {
    fn sample(&self, bounds: &BoundingBox, rng: &mut dyn RngCore) -> Position {
        let x = uniform(rng, bounds.left(), bounds.right());
        let y = uniform(rng, bounds.bottom(), bounds.top());
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;

    #[test]
    fn samples_stay_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = BoundingBox::new(Position::new(-8.0, 2.0), Position::new(4.0, 6.0));
        let s = UniformRandomSampling::new();
        for _ in 0..1_000 {
            let p = s.sample(&bounds, &mut rng);
            assert!(bounds.contains(p), "{p:?} outside {bounds:?}");
        }
    }

    #[test]
    fn degenerate_axis_yields_constant_coordinate() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = BoundingBox::new(Position::new(3.0, 0.0), Position::new(3.0, 10.0));
        let s = UniformRandomSampling::new();
        for _ in 0..100 {
            assert_eq!(s.sample(&bounds, &mut rng).x, 3.0);
        }
    }

    #[test]
    fn lower_edges_are_reachable() {
        let mut rng = FixedRng { value: 0 };
        let bounds = BoundingBox::new(Position::new(1.0, 2.0), Position::new(5.0, 9.0));
        let p = UniformRandomSampling::new().sample(&bounds, &mut rng);
        assert_eq!(p, Position::new(1.0, 2.0));
    }

    #[test]
    fn determinism_for_same_seed() {
        let bounds = BoundingBox::square_at_origin(10.0);
        let s = UniformRandomSampling::new();

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa: Vec<_> = (0..32).map(|_| s.sample(&bounds, &mut rng_a)).collect();
        let pb: Vec<_> = (0..32).map(|_| s.sample(&bounds, &mut rng_b)).collect();
        assert_eq!(pa, pb);

        let mut rng_c = StdRng::seed_from_u64(456);
        let pc: Vec<_> = (0..32).map(|_| s.sample(&bounds, &mut rng_c)).collect();
        assert_ne!(pa, pc);
    }
}
