//! Grand totals and per-submission averages

use std::time::Duration;

/// Totals across all submissions of an export
///
/// Only produced for exports with at least one submission, so the averages
/// are always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Number of distinct species
    pub species: usize,
    /// Number of distinct submissions
    pub submissions: usize,
    pub total_km: f64,
    pub total_miles: f64,
    pub total_duration: Duration,
}

impl Totals {
    /// Average distance per submission in kilometres
    pub fn avg_km(&self) -> f64 {
        self.total_km / self.submissions as f64
    }

    /// Average distance per submission in miles
    pub fn avg_miles(&self) -> f64 {
        self.total_miles / self.submissions as f64
    }

    /// Average time per submission, truncated to whole minutes
    pub fn avg_duration(&self) -> Duration {
        let avg_secs = self.total_duration.as_secs() / self.submissions as u64;
        Duration::from_secs(avg_secs - avg_secs % 60)
    }
}
