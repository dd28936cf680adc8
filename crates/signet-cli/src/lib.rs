//! Signet CLI - command-line driver for one analysis run
//!
//! Wires the pipeline end to end: read the antibody reference table and the
//! measurement matrix, then per cell line and dose filter the significant
//! records, map them to relations, resolve conflicts, and write the edge
//! list plus styling series.

#![warn(missing_docs)]

pub mod analysis;
pub mod cli;
pub mod config;

pub use analysis::{run_analysis, AnalysisSummary};
pub use cli::{AnalyzeArgs, Cli, Command};
pub use config::Config;
