//! Audit log growth analysis

use crate::config::Thresholds;
use crate::models::LogAnalysis;
use crate::observability::{steps, ReportLogger};
use crate::output::{Console, Style};
use crate::size::format_bytes;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Size of the audit log, `None` when it is not a regular file
pub fn measure_log(path: &Path) -> Option<u64> {
    let metadata = fs::metadata(path).ok()?;
    metadata.is_file().then(|| metadata.len())
}

/// Print the log section and return what was measured
///
/// A missing log reports size 0. A log larger than
/// `thresholds.log_warning_bytes` gets an immediate rotation warning.
pub fn analyze_log<W: Write>(
    path: &Path,
    thresholds: &Thresholds,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<LogAnalysis> {
    logger.log_step(steps::AUDIT_LOG);
    console.heading("📝 LOG GROWTH ANALYSIS")?;

    let Some(size_bytes) = measure_log(path) else {
        logger.log_path_missing(steps::AUDIT_LOG, path);
        console.styled("Audit log not found.", Style::Error)?;
        return Ok(LogAnalysis::default());
    };

    logger.log_measured(steps::AUDIT_LOG, path, size_bytes);
    console.line(format!(
        " - Audit Log Size: {}",
        console.paint(&format_bytes(size_bytes), Style::Value)
    ))?;

    let rotation_warning = size_bytes > thresholds.log_warning_bytes;
    if rotation_warning {
        console.styled(
            "WARNING: Log file unusually large – rotation required.",
            Style::Error,
        )?;
    }

    Ok(LogAnalysis {
        found: true,
        size_bytes,
        rotation_warning,
    })
}
