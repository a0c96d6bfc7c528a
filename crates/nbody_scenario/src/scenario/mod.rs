//! Scenario model, configuration, generation and text format.
pub mod body;
pub mod bounds;
pub mod builder;
pub mod config;
pub mod format;

pub use body::{Body, Position, Velocity};
pub use bounds::{derive_bounding_box, parse_explicit_bounding_box, BoundingBox, Corners};
pub use builder::{generate_body, generate_scenario, Scenario, ScenarioBuilder};
pub use config::{
    validate_body_count, BoundsSource, MassRange, MassValidation, ReferenceDensity,
    ScenarioConfig,
};
