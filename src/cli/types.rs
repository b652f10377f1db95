//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::check::CheckArgs;
use super::commands::estimate::EstimateArgs;

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "Heft - conceptual-design aircraft weight estimation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Engine config file (defaults to .heft/config.yaml merged with .heft/local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the converged weight breakdown of a design
    Estimate(EstimateArgs),

    /// Verify the roll-up sums of a recorded breakdown
    Check(CheckArgs),
}
