//! Scenario configuration: body count, bounds source and mass range.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::scenario::bounds::{derive_bounding_box, BoundingBox};

/// Lightest body of the reference scenario, in kilograms.
pub const REFERENCE_MIN_MASS: f64 = 13_000_000_000.0;
/// Heaviest body of the reference scenario, in kilograms.
pub const REFERENCE_MAX_MASS: f64 = 1_898_000_000_000_000.0;
/// Number of bodies in the reference scenario.
pub const REFERENCE_BODY_COUNT: usize = 10;
/// Surface of the reference scenario's bounding box, in square meters.
pub const REFERENCE_SURFACE: f64 = 223_267_590_144.0;

/// Inclusive range masses are sampled from, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MassRange {
    pub min: f64,
    pub max: f64,
}

impl Default for MassRange {
    fn default() -> Self {
        Self::reference()
    }
}

impl MassRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Mass range of the reference scenario.
    pub const fn reference() -> Self {
        Self::new(REFERENCE_MIN_MASS, REFERENCE_MAX_MASS)
    }

    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.min && mass <= self.max
    }

    /// Check the range under the given policy.
    ///
    /// `Strict` requires finite, non-negative bounds with `min <= max`.
    /// `Permissive` only requires finite bounds.
    pub fn validate(&self, policy: MassValidation) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "mass bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }

        match policy {
            MassValidation::Strict => {
                if self.min < 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "minimum mass ({}) must be >= 0",
                        self.min
                    )));
                }
                if self.min > self.max {
                    return Err(Error::InvalidConfig(format!(
                        "minimum mass ({}) is greater than maximum mass ({})",
                        self.min, self.max
                    )));
                }
            }
            MassValidation::Permissive => {
                if self.min > self.max {
                    warn!(
                        "Minimum mass {} is greater than maximum mass {}; sampling between them.",
                        self.min, self.max
                    );
                }
            }
        }

        Ok(())
    }
}

/// How strictly the mass range is checked before generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MassValidation {
    /// Reject negative minimums and inverted ranges.
    #[default]
    Strict,
    /// Accept any finite bounds, matching the historical generator scripts.
    Permissive,
}

/// Baseline scenario whose surface-per-body ratio is kept when deriving bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceDensity {
    pub body_count: usize,
    pub surface: f64,
}

impl Default for ReferenceDensity {
    fn default() -> Self {
        Self {
            body_count: REFERENCE_BODY_COUNT,
            surface: REFERENCE_SURFACE,
        }
    }
}

impl ReferenceDensity {
    pub const fn new(body_count: usize, surface: f64) -> Self {
        Self {
            body_count,
            surface,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.body_count == 0 {
            return Err(Error::InvalidConfig(
                "reference body count must be > 0".into(),
            ));
        }
        if !(self.surface.is_finite() && self.surface > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "reference surface must be finite and > 0, got {}",
                self.surface
            )));
        }
        Ok(())
    }

    /// Square box at the origin with this density for `body_count` bodies.
    pub fn bounding_box_for(&self, body_count: usize) -> Result<BoundingBox> {
        derive_bounding_box(body_count, self.body_count, self.surface)
    }
}

/// Where the sampling domain of a scenario comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundsSource {
    /// Square box at the origin scaled from a reference density.
    Derived(ReferenceDensity),
    /// Caller-supplied box.
    Explicit(BoundingBox),
}

impl Default for BoundsSource {
    fn default() -> Self {
        BoundsSource::Derived(ReferenceDensity::default())
    }
}

/// Validate a signed body count and convert it to a length.
pub fn validate_body_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        Error::Validation(format!("number of bodies must be >= 0, got {count}"))
    })
}

/// Configuration for generating one scenario.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioConfig {
    /// Number of bodies to generate.
    pub body_count: usize,
    /// Source of the sampling domain.
    pub bounds: BoundsSource,
    /// Inclusive mass range.
    pub masses: MassRange,
    /// Policy applied to `masses` by [`ScenarioConfig::validate`].
    pub mass_validation: MassValidation,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            body_count: 0,
            bounds: BoundsSource::default(),
            masses: MassRange::reference(),
            mass_validation: MassValidation::Strict,
        }
    }
}

impl ScenarioConfig {
    /// Creates a config for `body_count` bodies in a box derived from the reference density.
    pub fn new(body_count: usize) -> Self {
        Self {
            body_count,
            ..Default::default()
        }
    }

    /// Creates a config for `body_count` bodies inside an explicit box.
    pub fn explicit(body_count: usize, bounding_box: BoundingBox, masses: MassRange) -> Self {
        Self {
            body_count,
            bounds: BoundsSource::Explicit(bounding_box),
            masses,
            ..Default::default()
        }
    }

    /// Sets the reference density and switches to derived bounds.
    pub fn with_reference(mut self, reference: ReferenceDensity) -> Self {
        self.bounds = BoundsSource::Derived(reference);
        self
    }

    /// Sets an explicit bounding box.
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounds = BoundsSource::Explicit(bounding_box);
        self
    }

    /// Sets the mass range.
    pub fn with_masses(mut self, masses: MassRange) -> Self {
        self.masses = masses;
        self
    }

    /// Sets the mass validation policy.
    pub fn with_mass_validation(mut self, policy: MassValidation) -> Self {
        self.mass_validation = policy;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        match &self.bounds {
            BoundsSource::Derived(reference) => {
                reference.bounding_box_for(self.body_count)?;
            }
            BoundsSource::Explicit(bbox) => bbox.check_extent()?,
        }
        self.masses.validate(self.mass_validation)
    }

    /// Resolves the sampling domain for this configuration.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        match &self.bounds {
            BoundsSource::Derived(reference) => reference.bounding_box_for(self.body_count),
            BoundsSource::Explicit(bbox) => {
                bbox.check_extent()?;
                Ok(*bbox)
            }
        }
    }
}
