#![forbid(unsafe_code)]
//! nbody_scenario: randomized initial conditions for 2D N-body simulations.
//!
//! Modules:
//! - scenario: bodies, bounding boxes, configuration, generation and the text format
//! - sampling: position sampling strategies over a bounding box
//!
//! Generation takes the random source from the caller, so a seeded RNG gives a
//! reproducible scenario.
pub mod error;
pub mod sampling;
pub mod scenario;

/// Convenient re-exports for common types. Import with `use nbody_scenario::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{PositionSampling, UniformRandomSampling};
    pub use crate::scenario::config::{
        REFERENCE_BODY_COUNT, REFERENCE_MAX_MASS, REFERENCE_MIN_MASS, REFERENCE_SURFACE,
    };
    pub use crate::scenario::format::{
        derived_file_name, parse_scenario, read_scenario_file, serialize_scenario,
        write_scenario, write_scenario_file, EXPLICIT_FILE_NAME,
    };
    pub use crate::scenario::{
        derive_bounding_box, generate_body, generate_scenario, parse_explicit_bounding_box,
        validate_body_count, Body, BoundingBox, BoundsSource, Corners, MassRange,
        MassValidation, Position, ReferenceDensity, Scenario, ScenarioBuilder, ScenarioConfig,
        Velocity,
    };
}
