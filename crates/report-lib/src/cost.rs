//! Simulated compute cost estimation

use crate::output::format_currency;

/// Estimated hourly cost for `count` containers at `rate` per container
pub fn hourly_cost(count: usize, rate: f64) -> f64 {
    count as f64 * rate
}

/// Render an hourly cost, e.g. `$0.40/hour`
pub fn format_hourly(amount: f64, currency: &str) -> String {
    format!("{}/hour", format_currency(amount, currency))
}
