//! Builder that turns a [`ScenarioConfig`] into randomized bodies.
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::sampling::{uniform, PositionSampling, UniformRandomSampling};
use crate::scenario::body::{Body, Position};
use crate::scenario::bounds::BoundingBox;
use crate::scenario::config::{BoundsSource, MassRange, ScenarioConfig};
use crate::scenario::format;

/// Generated bodies, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Smallest box enclosing all body positions, `None` when empty.
    pub fn enclosing_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.bodies.iter().map(|b| b.position))
    }

    /// Lightest and heaviest mass as `(lightest, heaviest)`, `None` when empty.
    pub fn mass_span(&self) -> Option<(f64, f64)> {
        let first = self.bodies.first()?.mass;
        Some(self.bodies.iter().fold((first, first), |(lo, hi), b| {
            (lo.min(b.mass), hi.max(b.mass))
        }))
    }

    /// Serializes the scenario into its text format.
    pub fn to_text(&self) -> String {
        format::serialize_scenario(&self.bodies)
    }
}

/// Draw one body inside `bounds` with a mass from `masses`, at rest.
pub fn generate_body(bounds: &BoundingBox, masses: &MassRange, rng: &mut dyn RngCore) -> Body {
    generate_body_with(&UniformRandomSampling, bounds, masses, rng)
}

fn generate_body_with(
    sampling: &dyn PositionSampling,
    bounds: &BoundingBox,
    masses: &MassRange,
    rng: &mut dyn RngCore,
) -> Body {
    let position: Position = sampling.sample(bounds, rng);
    let mass = uniform(rng, masses.min, masses.max);
    Body::at_rest(position, mass)
}

/// Draw `count` independent bodies, in order.
pub fn generate_scenario(
    count: usize,
    bounds: &BoundingBox,
    masses: &MassRange,
    rng: &mut dyn RngCore,
) -> Vec<Body> {
    (0..count)
        .map(|_| generate_body(bounds, masses, &mut *rng))
        .collect()
}

/// Validated scenario generator.
pub struct ScenarioBuilder {
    /// Configuration this builder was created from.
    pub config: ScenarioConfig,
    bounding_box: BoundingBox,
    sampling: Box<dyn PositionSampling>,
}

impl ScenarioBuilder {
    /// Validates `config` and resolves its bounding box.
    pub fn try_new(config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let bounding_box = config.bounding_box()?;
        match config.bounds {
            BoundsSource::Derived(reference) => debug!(
                "Derived {}m x {}m box for {} bodies from reference density {} bodies / {}m^2.",
                bounding_box.width(),
                bounding_box.height(),
                config.body_count,
                reference.body_count,
                reference.surface
            ),
            BoundsSource::Explicit(_) => debug!(
                "Using explicit box {:?} to {:?}.",
                bounding_box.bottom_left, bounding_box.top_right
            ),
        }
        Ok(Self {
            config,
            bounding_box,
            sampling: Box::new(UniformRandomSampling),
        })
    }

    /// Replaces the position sampling strategy.
    pub fn with_sampling<S: PositionSampling + 'static>(mut self, sampling: S) -> Self {
        self.sampling = Box::new(sampling);
        self
    }

    /// Sampling domain of this builder.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Draws a single body.
    pub fn generate_body(&self, rng: &mut impl RngCore) -> Body {
        generate_body_with(
            self.sampling.as_ref(),
            &self.bounding_box,
            &self.config.masses,
            rng,
        )
    }

    /// Draws every body of the scenario in one pass.
    pub fn build(&self, rng: &mut impl RngCore) -> Scenario {
        let count = self.config.body_count;
        if count == 0 {
            warn!("Scenario has no bodies; output will only contain the count line.");
        }

        let mut bodies = Vec::with_capacity(count);
        for _ in 0..count {
            bodies.push(self.generate_body(rng));
        }

        info!(
            "Generated {} bodies in a {}m x {}m box.",
            bodies.len(),
            self.bounding_box.width(),
            self.bounding_box.height()
        );
        Scenario::new(bodies)
    }
}
