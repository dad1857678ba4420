//! Report configuration
//!
//! Defaults reproduce the stock report: `backups/` and
//! `security/access-audit.log` relative to the working directory, `docker`
//! as the runtime, and the simulated hourly rates.

use serde::Deserialize;
use std::path::PathBuf;

const MIB: u64 = 1024 * 1024;
const GIB: u64 = MIB * 1024;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory holding one subdirectory per environment
    #[serde(default = "default_backups_dir")]
    pub backups_dir: PathBuf,

    /// Audit log file to size
    #[serde(default = "default_audit_log")]
    pub audit_log: PathBuf,

    /// Container runtime executable
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Whether to emit ANSI colors
    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub rates: CostRates,

    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Simulated per-container hourly rates
///
/// These are placeholders for a local simulation, not billing data.
#[derive(Debug, Clone, Deserialize)]
pub struct CostRates {
    #[serde(default = "default_qa_hourly")]
    pub qa_hourly: f64,

    #[serde(default = "default_db_hourly")]
    pub db_hourly: f64,

    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Size thresholds, all compared with strict greater-than
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Thresholds {
    /// Total backup size above which backup reduction is suggested
    #[serde(default = "default_backup_bytes")]
    pub backup_bytes: u64,

    /// Audit log size above which log rotation is recommended
    #[serde(default = "default_log_recommend_bytes")]
    pub log_recommend_bytes: u64,

    /// Audit log size above which the inline warning is printed
    #[serde(default = "default_log_warning_bytes")]
    pub log_warning_bytes: u64,
}

fn default_backups_dir() -> PathBuf {
    PathBuf::from("backups")
}

fn default_audit_log() -> PathBuf {
    PathBuf::from("security").join("access-audit.log")
}

fn default_runtime() -> String {
    "docker".to_string()
}

fn default_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn default_qa_hourly() -> f64 {
    0.20
}

fn default_db_hourly() -> f64 {
    0.10
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_backup_bytes() -> u64 {
    5 * GIB
}

fn default_log_recommend_bytes() -> u64 {
    50 * MIB
}

fn default_log_warning_bytes() -> u64 {
    100 * MIB
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            backups_dir: default_backups_dir(),
            audit_log: default_audit_log(),
            runtime: default_runtime(),
            color: default_color(),
            rates: CostRates::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            qa_hourly: default_qa_hourly(),
            db_hourly: default_db_hourly(),
            currency: default_currency(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            backup_bytes: default_backup_bytes(),
            log_recommend_bytes: default_log_recommend_bytes(),
            log_warning_bytes: default_log_warning_bytes(),
        }
    }
}
