use clap::Parser;
use nbody_scenario_cli::{execute, init_tracing, Cli};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    execute(cli.command)
}
