#![forbid(unsafe_code)]

mod cli;
mod commands;

pub use cli::{Cli, Command, GenerateArgs};
pub use commands::{execute, generate, inspect, resolve_seed, Inspection};

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call, e.g. from tests, keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
