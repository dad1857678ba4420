//! Cost optimization recommendations
//!
//! Every suggestion is a fixed string. Three independent size and usage
//! thresholds decide which conditional groups are included; the general
//! group is always included.

use crate::config::Thresholds;
use crate::observability::{steps, ReportLogger};
use crate::output::{Console, Style};
use std::io::{self, Write};

/// Recommendation group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Total backup size exceeded its threshold
    Backups,
    /// Audit log exceeded its threshold
    Logs,
    /// QA containers are running
    Qa,
    /// Always included
    General,
}

/// A single advisory line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub category: Category,
    pub text: &'static str,
}

/// Measurements the recommendation engine depends on
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub total_backup_bytes: u64,
    pub log_bytes: u64,
    pub qa_containers: &'a [String],
}

const BACKUP_SUGGESTIONS: &[&str] = &[
    "Reduce backup retention to 7 days.",
    "Compress large SQL dumps using gzip.",
    "Deduplicate QA backup usage.",
];

const LOG_SUGGESTIONS: &[&str] = &[
    "Enable log rotation for access-audit.log.",
    "Move historical logs to cold storage.",
];

const QA_SUGGESTIONS: &[&str] = &[
    "Auto-delete QA environments after TTL.",
    "Limit QA to one per environment.",
];

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Weekly docker prune required.",
    "Implement backup cleanup cron job.",
    "Add monitoring for disk usage alerts.",
    "Prefer shared validated backup for QA instead of creating new each time.",
    "Ensure ARP dumps are compressed and stored separately.",
];

/// Closing line printed after all suggestions
pub const CLOSING_SUMMARY: &str = "All suggestions applied will reduce storage/computing by 40–70%.";

fn group(
    category: Category,
    texts: &'static [&'static str],
) -> impl Iterator<Item = Recommendation> {
    texts.iter().map(move |text| Recommendation {
        category,
        text: *text,
    })
}

/// Recommendations for the given measurements, in display order
pub fn recommend(input: &RecommendationInput<'_>, thresholds: &Thresholds) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if input.total_backup_bytes > thresholds.backup_bytes {
        recommendations.extend(group(Category::Backups, BACKUP_SUGGESTIONS));
    }
    if input.log_bytes > thresholds.log_recommend_bytes {
        recommendations.extend(group(Category::Logs, LOG_SUGGESTIONS));
    }
    if !input.qa_containers.is_empty() {
        recommendations.extend(group(Category::Qa, QA_SUGGESTIONS));
    }
    recommendations.extend(group(Category::General, GENERAL_SUGGESTIONS));

    recommendations
}

/// Print recommendations grouped by category, then the closing summary
pub fn print_recommendations<W: Write>(
    recommendations: &[Recommendation],
    console: &mut Console<W>,
    logger: &ReportLogger,
) -> io::Result<()> {
    logger.log_step(steps::RECOMMENDATIONS);
    console.heading("📉 COST OPTIMIZATION RECOMMENDATIONS")?;

    for (i, rec) in recommendations.iter().enumerate() {
        console.line(format!("- {}", rec.text))?;

        let group_ends = recommendations
            .get(i + 1)
            .map(|next| next.category != rec.category)
            .unwrap_or(true);
        if group_ends {
            console.blank()?;
        }
    }

    console.styled(CLOSING_SUMMARY, Style::Success)
}
