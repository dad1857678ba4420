//! Library for the local environment cost report
//!
//! This crate provides the measurement steps behind `cost-report`:
//! - Backup and audit log sizing
//! - Container inspection through the runtime CLI
//! - Reclaimable disk space from the runtime's disk-usage summary
//! - Simulated hourly compute costs
//! - Threshold-based recommendations
//!
//! Every step degrades to a neutral value instead of failing, so a report
//! always runs to completion.

pub mod audit_log;
pub mod backups;
pub mod config;
pub mod containers;
pub mod cost;
pub mod disk_usage;
pub mod models;
pub mod observability;
pub mod output;
pub mod recommendations;
pub mod report;
pub mod runtime;
pub mod size;

pub use config::{CostRates, ReportConfig, Thresholds};
pub use models::*;
pub use observability::ReportLogger;
pub use output::{Console, Style};
pub use report::run_report;
pub use runtime::{CliRuntime, ContainerRuntime, RuntimeError};
