//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Signed molecular interaction networks from RPPA measurements
#[derive(Debug, Parser)]
#[command(name = "signet", version, about)]
pub struct Cli {
    /// Raise log verbosity to debug
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one analysis over a data directory
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Directory holding the input tables
    pub dir: PathBuf,

    /// Minimum absolute change value; overrides the config file
    #[arg(long)]
    pub threshold: Option<f64>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory; defaults to the data directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}
