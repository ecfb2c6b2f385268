//! Scenario replay CLI.
//!
//! Reads a scenarios directory, replays each scenario through a fresh
//! engine and prints its description followed by the engine output.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use book_replay::{load_scenarios, run_scenario};

/// Replay order book scenario files through the matching engine.
#[derive(Debug, Parser)]
#[command(name = "book-replay", version)]
struct Args {
    /// Directory holding input.txt and output.txt.
    scenarios_dir: PathBuf,

    /// Compare every scenario's output against output.txt and fail on
    /// divergence.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let scenarios = load_scenarios(&args.scenarios_dir)?;
    info!(count = scenarios.len(), "loaded scenarios");

    let mut diverged = 0usize;
    for (i, scenario) in scenarios.iter().enumerate() {
        let output = run_scenario(scenario)
            .with_context(|| format!("scenario {} ({})", i + 1, scenario.description))?;

        println!("{}", scenario.description);
        println!("{}", output);
        println!();

        if args.check && output != scenario.expected_output {
            error!(scenario = %scenario.description, "output diverged from expected");
            diverged += 1;
        }
    }

    if diverged > 0 {
        bail!("{} scenario(s) diverged from expected output", diverged);
    }
    Ok(())
}
