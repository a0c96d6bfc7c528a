//! Command-line surface of `generate-scenario`.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nbody_scenario::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "generate-scenario")]
#[command(about = "Generate randomized initial conditions for an N-body simulation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bodies in a square box sized from the reference density, written to `<N>-bodies.txt`
    Benchmark {
        /// Number of bodies to add inside the bounding box
        #[arg(short = 'p', long = "n-bodies", allow_negative_numbers = true)]
        n_bodies: i64,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Bodies inside an explicit bounding box, written to `bodies.txt`
    Bounded {
        /// Upper-left coordinates of the bounding box
        #[arg(long = "north-west", visible_alias = "nw", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        north_west: Vec<f64>,

        /// Upper-right coordinates of the bounding box
        #[arg(long = "north-east", visible_alias = "ne", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        north_east: Vec<f64>,

        /// Bottom-right coordinates of the bounding box
        #[arg(long = "south-east", visible_alias = "se", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        south_east: Vec<f64>,

        /// Bottom-left coordinates of the bounding box
        #[arg(long = "south-west", visible_alias = "sw", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        south_west: Vec<f64>,

        /// Number of bodies to add inside the bounding box
        #[arg(short = 'p', long = "n-bodies", allow_negative_numbers = true)]
        n_bodies: i64,

        /// Minimum body mass in kilograms
        #[arg(long = "min-mass", visible_alias = "min-m", allow_negative_numbers = true)]
        min_mass: f64,

        /// Maximum body mass in kilograms
        #[arg(long = "max-mass", visible_alias = "max-m", allow_negative_numbers = true)]
        max_mass: f64,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Read a scenario file back and log a summary
    Inspect {
        /// Scenario file to read
        file: PathBuf,
    },
}

/// Options shared by the generating subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Seed for a reproducible scenario; drawn at random and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file, overriding the default name
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Accept negative or inverted mass ranges instead of failing
    #[arg(long = "permissive-masses")]
    pub permissive_masses: bool,
}

impl GenerateArgs {
    pub fn mass_validation(&self) -> MassValidation {
        if self.permissive_masses {
            MassValidation::Permissive
        } else {
            MassValidation::Strict
        }
    }
}

/// Converts a two-value coordinate flag into a position.
pub(crate) fn position(values: &[f64]) -> Position {
    match values {
        [x, y] => Position::new(*x, *y),
        // clap enforces two values per flag.
        _ => Position::new(f64::NAN, f64::NAN),
    }
}
