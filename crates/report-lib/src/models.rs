//! Values produced by the measurement steps
//!
//! Nothing here outlives a single run; the orchestrator threads these into
//! the recommendation engine and returns them in a [`ReportSummary`].

use std::collections::BTreeMap;

/// Backup sizes per environment subdirectory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSummary {
    /// Environment name -> total bytes beneath it
    pub environments: BTreeMap<String, u64>,
    /// Sum over all environments
    pub total_bytes: u64,
}

impl BackupSummary {
    pub fn from_environments(environments: BTreeMap<String, u64>) -> Self {
        let total_bytes = environments.values().sum();
        Self {
            environments,
            total_bytes,
        }
    }
}

/// Result of inspecting the audit log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogAnalysis {
    /// Whether the log file exists
    pub found: bool,
    /// Size in bytes, 0 when missing
    pub size_bytes: u64,
    /// Whether the inline rotation warning fired
    pub rotation_warning: bool,
}

/// Running containers matched by a name keyword, with their simulated cost
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerUsage {
    /// Matched container names, in runtime order
    pub containers: Vec<String>,
    /// Estimated cost per hour
    pub hourly_cost: f64,
}

impl ContainerUsage {
    pub fn count(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

/// Disk-usage summary from the container runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskUsage {
    /// Raw summary text, `None` when the runtime was unavailable
    pub raw: Option<String>,
    /// Reclaimable figure taken verbatim from the summary
    pub reclaimable: Option<String>,
}

impl DiskUsage {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.raw.is_some()
    }
}

/// Everything measured during one report run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub backups: Option<BackupSummary>,
    pub log: LogAnalysis,
    pub qa: ContainerUsage,
    pub disk_usage: DiskUsage,
    pub databases: ContainerUsage,
    pub recommendations: Vec<crate::recommendations::Recommendation>,
}

impl ReportSummary {
    /// Total backup bytes, 0 when the backups root was missing
    pub fn total_backup_bytes(&self) -> u64 {
        self.backups.as_ref().map(|b| b.total_bytes).unwrap_or(0)
    }
}
