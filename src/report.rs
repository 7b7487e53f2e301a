//! Text report for an aggregated eBird export
//!
//! The report is a summary block of totals and averages followed by one
//! aligned row per species, ordered by scientific name.

use chrono::NaiveDateTime;
use std::fmt::Write;
use std::time::Duration;

use crate::Result;
use crate::constants::REPORT_RULE_WIDTH;
use crate::stats::{Aggregator, Totals};

/// Renderable statistics for one export
#[derive(Debug)]
pub struct Report<'a> {
    aggregator: &'a Aggregator,
    totals: Totals,
}

impl<'a> Report<'a> {
    /// Build a report, failing if the export held no observations
    pub fn new(aggregator: &'a Aggregator) -> Result<Self> {
        let totals = aggregator.totals()?;
        Ok(Self { aggregator, totals })
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Summary block: counts, distance and time with per-submission averages
    pub fn summary(&self) -> String {
        let t = &self.totals;
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "{} species; {} submissions", t.species, t.submissions);
        let _ = writeln!(out, "{:.0} total km; {:.1} avg km", t.total_km, t.avg_km());
        let _ = writeln!(out, "{:.0} total mi; {:.1} avg mi", t.total_miles, t.avg_miles());
        let _ = writeln!(
            out,
            "{} total time; {} avg time",
            format_duration(t.total_duration),
            format_duration(t.avg_duration())
        );
        if let Some((first, last)) = self.aggregator.observed_range() {
            let _ = writeln!(out, "Observed {} to {}", format_date(first), format_date(last));
        }

        out
    }

    /// Species table, one row per scientific name in ascending order
    pub fn species_table(&self) -> String {
        let rows: Vec<[String; 4]> = self
            .aggregator
            .species()
            .iter()
            .map(|(name, stats)| {
                [
                    name.clone(),
                    stats.common_name.clone(),
                    format!("{} total", stats.count),
                    format!("{} pics/sounds", stats.media_assets),
                ]
            })
            .collect();

        let mut widths = [0usize; 3];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for [name, common, count, media] in &rows {
            let line = format!(
                "{:<w0$} {:<w1$} {:<w2$} {}",
                name,
                common,
                count,
                media,
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }

    /// Full report: summary, rule and species table
    pub fn render(&self) -> String {
        format!(
            "{}{}\n{}",
            self.summary(),
            "─".repeat(REPORT_RULE_WIDTH),
            self.species_table()
        )
    }
}

/// Format a duration as hours, minutes and seconds, e.g. `1h30m0s`.
///
/// Leading zero units are dropped: `45m0s`, `0s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

fn format_date(observed: NaiveDateTime) -> String {
    observed.format("%Y-%m-%d").to_string()
}
