//! Command implementations behind the CLI.
use std::path::{Path, PathBuf};

use anyhow::Context;
use nbody_scenario::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::cli::{position, Command, GenerateArgs};

/// Summary of a scenario file read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub body_count: usize,
    /// Lightest and heaviest mass.
    pub masses: Option<(f64, f64)>,
    pub extent: Option<BoundingBox>,
}

/// Runs one parsed command.
pub fn execute(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Benchmark { n_bodies, generate } => {
            let count = validate_body_count(n_bodies)?;
            let config =
                ScenarioConfig::new(count).with_mass_validation(generate.mass_validation());
            let output = output_or(&generate, &derived_file_name(count));
            self::generate(config, &output, generate.seed)?;
        }
        Command::Bounded {
            north_west,
            north_east,
            south_east,
            south_west,
            n_bodies,
            min_mass,
            max_mass,
            generate,
        } => {
            let bbox = parse_explicit_bounding_box(
                position(&north_west),
                position(&north_east),
                position(&south_east),
                position(&south_west),
            )?;
            let count = validate_body_count(n_bodies)?;
            let config = ScenarioConfig::explicit(count, bbox, MassRange::new(min_mass, max_mass))
                .with_mass_validation(generate.mass_validation());
            let output = output_or(&generate, EXPLICIT_FILE_NAME);
            self::generate(config, &output, generate.seed)?;
        }
        Command::Inspect { file } => {
            inspect(&file)?;
        }
    }
    Ok(())
}

fn output_or(args: &GenerateArgs, default: &str) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Returns the given seed, or a fresh one from the OS-seeded thread generator.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().next_u64())
}

/// Generates a scenario for `config` and writes it to `output`.
///
/// Nothing is written when the configuration is invalid.
pub fn generate(
    config: ScenarioConfig,
    output: &Path,
    seed: Option<u64>,
) -> anyhow::Result<Scenario> {
    let builder = ScenarioBuilder::try_new(config)?;
    let seed = resolve_seed(seed);
    info!("Seeding generator with {seed}.");

    let mut rng = StdRng::seed_from_u64(seed);
    let scenario = builder.build(&mut rng);

    write_scenario_file(&scenario.bodies, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(scenario)
}

/// Reads `file` and logs its body count, mass span and extent.
pub fn inspect(file: &Path) -> anyhow::Result<Inspection> {
    let bodies =
        read_scenario_file(file).with_context(|| format!("failed to read {}", file.display()))?;
    let scenario = Scenario::new(bodies);

    let inspection = Inspection {
        body_count: scenario.len(),
        masses: scenario.mass_span(),
        extent: scenario.enclosing_box(),
    };

    info!("{}: {} bodies.", file.display(), inspection.body_count);
    if let Some((lightest, heaviest)) = inspection.masses {
        info!("Masses span [{lightest}, {heaviest}] kg.");
    }
    if let Some(extent) = inspection.extent {
        info!(
            "Positions span ({}, {}) to ({}, {}).",
            extent.left(),
            extent.bottom(),
            extent.right(),
            extent.top()
        );
    }

    Ok(inspection)
}
