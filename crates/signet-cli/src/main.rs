//! Signet - command-line driver for RPPA network inference.

use clap::Parser;
use signet_cli::{analysis, Cli, Command, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Command::Analyze(args) => {
            let mut config = match &args.config {
                Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
                None => Config::default(),
            };
            if let Some(threshold) = args.threshold {
                config.threshold = threshold;
            }
            config.validate().map_err(anyhow::Error::msg)?;

            let out_dir = args.out.clone().unwrap_or_else(|| args.dir.clone());
            let summary = analysis::run_analysis(&args.dir, &out_dir, &config)?;

            println!("{}", summary.report());
        }
    }

    Ok(())
}
