//! Command-line runner for boat simulation scenarios.

mod output;
mod scenario;

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use paddle_core::{Overridable, StrokeModel};
use paddle_sim::simulate;
use paddle_strokes::{ConstantStroke, DriveRecoveryStroke};
use serde::{Serialize, de::DeserializeOwned};

use crate::scenario::Scenario;

#[derive(Debug, Parser)]
#[command(name = "paddle", about = "Simulate a paddled boat from a TOML scenario")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one scenario and print its summary.
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Scenario file.
    scenario: PathBuf,

    /// Stroke force model shared by every paddler.
    #[arg(short, long, value_enum, default_value_t = StrokeKind::DriveRecovery)]
    stroke: StrokeKind,

    /// Write every sample to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full result, inputs included, to this JSON file.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrokeKind {
    /// The same force throughout the cycle.
    Constant,
    /// A half-sine drive followed by a flat recovery.
    DriveRecovery,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run(args) => run(&args),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let text = fs::read_to_string(&args.scenario)
        .with_context(|| format!("failed to read {}", args.scenario.display()))?;

    match args.stroke {
        StrokeKind::Constant => run_with(&ConstantStroke, &text, args),
        StrokeKind::DriveRecovery => run_with(&DriveRecoveryStroke, &text, args),
    }
}

fn run_with<M>(model: &M, text: &str, args: &RunArgs) -> Result<()>
where
    M: StrokeModel,
    M::Shape: Overridable + Default + Serialize,
    <M::Shape as Overridable>::Overrides: DeserializeOwned + Default,
{
    let scenario: Scenario<<M::Shape as Overridable>::Overrides> = Scenario::from_toml(text)
        .with_context(|| format!("failed to parse {}", args.scenario.display()))?;

    info!(
        "running {} with {} paddler(s)",
        args.scenario.display(),
        scenario.paddlers.len()
    );
    let result = simulate(model, &scenario.paddlers, &scenario.boat, &scenario.stroke)?;

    if let Some(path) = &args.csv {
        output::write_csv(create(path)?, result.samples())?;
        info!("wrote {} samples to {}", result.samples().len(), path.display());
    }
    if let Some(path) = &args.json {
        output::write_json(create(path)?, &result)?;
        info!("wrote result to {}", path.display());
    }

    print!("{}", output::summary_table(result.summary()));
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
