//! Structured diagnostics for report runs
//!
//! The report itself goes to stdout through [`crate::output::Console`]. These
//! events go through `tracing` so they can be filtered with `RUST_LOG` and
//! never mix with the report text.

use crate::models::ReportSummary;
use crate::runtime::RuntimeError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Report step names used in log events
pub mod steps {
    pub const BACKUPS: &str = "backups";
    pub const AUDIT_LOG: &str = "audit_log";
    pub const QA_CONTAINERS: &str = "qa_containers";
    pub const DISK_USAGE: &str = "disk_usage";
    pub const DB_CONTAINERS: &str = "db_containers";
    pub const RECOMMENDATIONS: &str = "recommendations";
}

/// Structured logger for report events
#[derive(Clone)]
pub struct ReportLogger {
    runtime: String,
}

impl ReportLogger {
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }

    /// Log report start
    pub fn log_started(&self, version: &str) {
        info!(
            event = "report_started",
            runtime = %self.runtime,
            version = %version,
            "Cost report started"
        );
    }

    /// Log a step that is starting
    pub fn log_step(&self, step: &str) {
        debug!(event = "step_started", step = %step, "Running report step");
    }

    /// Log a measured path
    pub fn log_measured(&self, step: &str, path: &Path, bytes: u64) {
        debug!(
            event = "path_measured",
            step = %step,
            path = %path.display(),
            bytes = bytes,
            "Measured path"
        );
    }

    /// Log an input path that does not exist
    pub fn log_path_missing(&self, step: &str, path: &Path) {
        info!(
            event = "path_missing",
            step = %step,
            path = %path.display(),
            "Input path not found, using neutral result"
        );
    }

    /// Log a runtime call that failed and was degraded
    pub fn log_runtime_unavailable(&self, step: &str, error: &RuntimeError) {
        warn!(
            event = "runtime_unavailable",
            step = %step,
            runtime = %self.runtime,
            kind = error.kind(),
            error = %error,
            "Container runtime unavailable, using neutral result"
        );
    }

    /// Log containers matched by a keyword
    pub fn log_containers_matched(&self, step: &str, keyword: &str, matched: usize, total: usize) {
        debug!(
            event = "containers_matched",
            step = %step,
            keyword = %keyword,
            matched = matched,
            running = total,
            "Filtered running containers"
        );
    }

    /// Log a disk-usage summary without a reclaimable figure
    pub fn log_reclaimable_unparsed(&self) {
        warn!(
            event = "reclaimable_unparsed",
            step = steps::DISK_USAGE,
            runtime = %self.runtime,
            "No reclaimable figure in disk-usage summary"
        );
    }

    /// Log report completion
    pub fn log_finished(&self, summary: &ReportSummary) {
        info!(
            event = "report_finished",
            runtime = %self.runtime,
            backup_bytes = summary.total_backup_bytes(),
            log_bytes = summary.log.size_bytes,
            qa_containers = summary.qa.count(),
            db_containers = summary.databases.count(),
            reclaimable = ?summary.disk_usage.reclaimable,
            recommendations = summary.recommendations.len(),
            "Cost report finished"
        );
    }
}
