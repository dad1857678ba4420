//! Report orchestration
//!
//! Runs the analyses in a fixed order: backups, audit log, QA containers,
//! runtime disk usage, database compute, then recommendations. A step that
//! cannot measure anything prints a notice and hands back its neutral value,
//! so the report always reaches its terminator. Only a failure to write the
//! report itself is returned as an error.

use crate::audit_log::analyze_log;
use crate::backups::analyze_backups;
use crate::config::ReportConfig;
use crate::containers::{inspect_databases, inspect_qa};
use crate::disk_usage::report_disk_usage;
use crate::models::ReportSummary;
use crate::observability::ReportLogger;
use crate::output::{Console, Style};
use crate::recommendations::{print_recommendations, recommend, RecommendationInput};
use crate::runtime::ContainerRuntime;
use std::io::{self, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BANNER_RULE: &str = "============================";

fn print_banner<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    console.blank()?;
    console.styled(BANNER_RULE, Style::Heading)?;
    console.styled("COST ANALYSIS REPORT", Style::Heading)?;
    console.styled(BANNER_RULE, Style::Heading)?;
    console.line(format!(
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    console.blank()
}

/// Run the full report against `runtime`, writing to `console`
pub async fn run_report<W: Write>(
    config: &ReportConfig,
    runtime: &dyn ContainerRuntime,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<ReportSummary> {
    logger.log_started(VERSION);
    print_banner(console)?;

    let backups = analyze_backups(&config.backups_dir, console, logger)?;
    let log = analyze_log(&config.audit_log, &config.thresholds, console, logger)?;
    let qa = inspect_qa(runtime, &config.rates, console, logger).await?;
    let disk_usage = report_disk_usage(runtime, console, logger).await?;
    let databases = inspect_databases(runtime, &config.rates, console, logger).await?;

    let mut summary = ReportSummary {
        backups,
        log,
        qa,
        disk_usage,
        databases,
        recommendations: Vec::new(),
    };

    let input = RecommendationInput {
        total_backup_bytes: summary.total_backup_bytes(),
        log_bytes: summary.log.size_bytes,
        qa_containers: &summary.qa.containers,
    };
    summary.recommendations = recommend(&input, &config.thresholds);
    print_recommendations(&summary.recommendations, console, logger)?;

    console.blank()?;
    console.styled("=== END OF REPORT ===", Style::Heading)?;
    console.blank()?;
    console.flush()?;

    logger.log_finished(&summary);

    Ok(summary)
}
