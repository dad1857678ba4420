//! Container runtime disk-usage reporting

use crate::models::DiskUsage;
use crate::observability::{steps, ReportLogger};
use crate::output::{Console, Style};
use crate::runtime::{display_name, ContainerRuntime};
use std::io::{self, Write};

const RECLAIMABLE_TOKEN: &str = "Reclaimable";

/// Reclaimable figure from a disk-usage summary
///
/// Looks at every line containing `Reclaimable` and takes the last
/// whitespace-separated token of the last such line. `None` when no line
/// matches.
pub fn parse_reclaimable(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains(RECLAIMABLE_TOKEN))
        .filter_map(|line| line.split_whitespace().last())
        .last()
        .map(str::to_string)
}

/// Print the runtime disk-usage section
pub async fn report_disk_usage<W: Write>(
    runtime: &dyn ContainerRuntime,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<DiskUsage> {
    logger.log_step(steps::DISK_USAGE);
    console.heading("🐳 DOCKER WASTE ANALYSIS")?;

    let raw = match runtime.disk_usage_summary().await {
        Ok(raw) => raw,
        Err(e) => {
            logger.log_runtime_unavailable(steps::DISK_USAGE, &e);
            console.styled(
                &format!("{} is not running.", display_name(runtime.name())),
                Style::Error,
            )?;
            return Ok(DiskUsage::unavailable());
        }
    };

    console.line(&raw)?;

    let reclaimable = parse_reclaimable(&raw);
    match &reclaimable {
        Some(figure) => console.line(format!(
            "{}{}",
            console.paint("Reclaimable Space: ", Style::Heading),
            console.paint(figure, Style::Success)
        ))?,
        None => {
            logger.log_reclaimable_unparsed();
            console.styled(
                &format!(
                    "Could not parse reclaimable space from {} df output.",
                    runtime.name()
                ),
                Style::Warning,
            )?;
        }
    }

    Ok(DiskUsage {
        raw: Some(raw),
        reclaimable,
    })
}
