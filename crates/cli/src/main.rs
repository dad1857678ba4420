//! Local Environment Cost Report CLI
//!
//! Prints a one-shot storage and compute cost report for a local
//! development environment: backup sizes, audit log growth, QA and database
//! containers, reclaimable runtime disk space, and recommendations.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use report_lib::{run_report, CliRuntime, Console, ReportLogger};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Local Environment Cost Report
#[derive(Parser)]
#[command(name = "cost-report")]
#[command(author, version, about = "Cost and storage report for a local development environment", long_about = None)]
pub struct Cli {
    /// Directory containing one backup subdirectory per environment
    #[arg(long)]
    pub backups_dir: Option<PathBuf>,

    /// Audit log file to size
    #[arg(long)]
    pub audit_log: Option<PathBuf>,

    /// Container runtime executable (docker-compatible)
    #[arg(long)]
    pub runtime: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the report on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::load(&cli);

    let runtime = CliRuntime::new(config.runtime.clone());
    let logger = ReportLogger::new(config.runtime.clone());
    let mut console = Console::stdout(config.color);

    run_report(&config, &runtime, &mut console, &logger)
        .await
        .context("Failed to write report")?;

    Ok(())
}
