//! Container inspection by name keyword
//!
//! Containers are classified purely by naming convention: a name containing
//! "qa" is a QA environment, one containing "db" is a database.

use crate::config::CostRates;
use crate::cost::{format_hourly, hourly_cost};
use crate::models::ContainerUsage;
use crate::observability::{steps, ReportLogger};
use crate::output::{Console, Style};
use crate::runtime::{display_name, ContainerRuntime};
use std::io::{self, Write};

pub const QA_KEYWORD: &str = "qa";
pub const DB_KEYWORD: &str = "db";

/// Names containing `keyword`, compared case-insensitively, in input order
pub fn filter_by_keyword(names: &[String], keyword: &str) -> Vec<String> {
    let keyword = keyword.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&keyword))
        .cloned()
        .collect()
}

/// Running containers matching `keyword`, or `None` if the runtime failed
///
/// The failure is logged and a notice printed; callers substitute their
/// neutral value.
async fn matching_containers<W: Write>(
    runtime: &dyn ContainerRuntime,
    keyword: &str,
    step: &str,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<Option<Vec<String>>> {
    match runtime.running_container_names().await {
        Ok(names) => {
            let matched = filter_by_keyword(&names, keyword);
            logger.log_containers_matched(step, keyword, matched.len(), names.len());
            Ok(Some(matched))
        }
        Err(e) => {
            logger.log_runtime_unavailable(step, &e);
            let notice = format!(
                "{} not running or not accessible.",
                display_name(runtime.name())
            );
            console.styled(&notice, Style::Error)?;
            Ok(None)
        }
    }
}

fn print_names<W: Write>(names: &[String], console: &mut Console<W>) -> io::Result<()> {
    for name in names {
        console.line(format!(" - {}", console.paint(name, Style::Value)))?;
    }
    Ok(())
}

/// Print the QA environment section
pub async fn inspect_qa<W: Write>(
    runtime: &dyn ContainerRuntime,
    rates: &CostRates,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<ContainerUsage> {
    logger.log_step(steps::QA_CONTAINERS);
    console.heading("🧪 QA ENVIRONMENT ANALYSIS")?;

    let Some(containers) =
        matching_containers(runtime, QA_KEYWORD, steps::QA_CONTAINERS, console, logger).await?
    else {
        return Ok(ContainerUsage::default());
    };

    if containers.is_empty() {
        console.line(" - No QA containers active.")?;
        return Ok(ContainerUsage::default());
    }

    console.styled("Active QA Containers:", Style::Success)?;
    print_names(&containers, console)?;

    let cost = hourly_cost(containers.len(), rates.qa_hourly);
    console.blank()?;
    console.line(format!(
        "Estimated QA Compute Cost (local sim): {}",
        console.paint(&format_hourly(cost, &rates.currency), Style::Success)
    ))?;

    Ok(ContainerUsage {
        containers,
        hourly_cost: cost,
    })
}

/// Print the database compute section
pub async fn inspect_databases<W: Write>(
    runtime: &dyn ContainerRuntime,
    rates: &CostRates,
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<ContainerUsage> {
    logger.log_step(steps::DB_CONTAINERS);
    console.heading("⚙️ COMPUTE USAGE ANALYSIS")?;

    let Some(containers) =
        matching_containers(runtime, DB_KEYWORD, steps::DB_CONTAINERS, console, logger).await?
    else {
        return Ok(ContainerUsage::default());
    };

    console.line(format!("Active Database Containers: {}", containers.len()))?;
    print_names(&containers, console)?;

    let cost = hourly_cost(containers.len(), rates.db_hourly);
    console.blank()?;
    console.line(format!(
        "Estimated DB Compute Cost: {}",
        console.paint(&format_hourly(cost, &rates.currency), Style::Success)
    ))?;

    Ok(ContainerUsage {
        containers,
        hourly_cost: cost,
    })
}
