//! Backup storage analysis

use crate::models::BackupSummary;
use crate::observability::{steps, ReportLogger};
use crate::output::{Console, Style};
use crate::size::{dir_size, format_bytes};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Size every environment subdirectory directly under `root`
///
/// Returns `None` when `root` is not a directory. Plain files under `root`
/// are not environments and are skipped.
pub fn measure_backups(root: &Path) -> Option<BackupSummary> {
    if !root.is_dir() {
        return None;
    }

    let environments: BTreeMap<String, u64> = fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some((name, dir_size(&path)))
        })
        .collect();

    Some(BackupSummary::from_environments(environments))
}

/// Print the backup section and return what was measured
pub fn analyze_backups<W: Write>(
    root: &Path,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<Option<BackupSummary>> {
    logger.log_step(steps::BACKUPS);
    console.heading("📦 BACKUP STORAGE ANALYSIS")?;

    let Some(summary) = measure_backups(root) else {
        logger.log_path_missing(steps::BACKUPS, root);
        console.styled("No backups directory found.", Style::Error)?;
        return Ok(None);
    };

    for (env, bytes) in &summary.environments {
        logger.log_measured(steps::BACKUPS, &root.join(env), *bytes);
        console.line(format!(
            " - {} backups: {}",
            env.to_uppercase(),
            console.paint(&format_bytes(*bytes), Style::Value)
        ))?;
    }

    console.blank()?;
    console.line(format!(
        "{}{}",
        console.paint("Total Backup Storage: ", Style::Heading),
        console.paint(&format_bytes(summary.total_bytes), Style::Success)
    ))?;

    Ok(Some(summary))
}
