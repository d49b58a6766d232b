//! Command-line parsing for the synthetic finance operations pipeline.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! generation and profit code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ROOT_ENV;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "finops", version, about = "Synthetic finance operations data + profit metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the synthetic raw CSV (data/raw/finance_operations.csv).
    Generate(GenerateArgs),
    /// Compute AbsoluteProfitCHF and ProfitMargin from the raw CSV.
    Process(RootArgs),
    /// Generate, then process.
    Run(GenerateArgs),
}

/// Project root selection shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct RootArgs {
    /// Project root containing `data/` (defaults to the current directory).
    #[arg(long, env = ROOT_ENV, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Options for the generator.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Fix the random seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}
