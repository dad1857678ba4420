//! Configuration loading for the CLI
//!
//! Precedence: command-line flags, then `COST_REPORT_*` environment
//! variables, then built-in defaults.

use crate::Cli;
use anyhow::Result;
use report_lib::ReportConfig;
use tracing::{info, warn};

const ENV_PREFIX: &str = "COST_REPORT";

/// Read `COST_REPORT_*` variables into a configuration
///
/// Nested keys use a double underscore, e.g.
/// `COST_REPORT_THRESHOLDS__BACKUP_BYTES`.
pub fn from_env() -> Result<ReportConfig> {
    let config = config::Config::builder()
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Resolve the effective configuration for this run
pub fn load(cli: &Cli) -> ReportConfig {
    let mut config = from_env().unwrap_or_else(|e| {
        warn!(error = %e, "Invalid {}_* environment configuration, using defaults", ENV_PREFIX);
        ReportConfig::default()
    });

    if let Some(dir) = &cli.backups_dir {
        config.backups_dir = dir.clone();
    }
    if let Some(path) = &cli.audit_log {
        config.audit_log = path.clone();
    }
    if let Some(runtime) = &cli.runtime {
        config.runtime = runtime.clone();
    }
    if cli.no_color {
        config.color = false;
    }

    info!(
        backups_dir = %config.backups_dir.display(),
        audit_log = %config.audit_log.display(),
        runtime = %config.runtime,
        "Report configured"
    );

    config
}
