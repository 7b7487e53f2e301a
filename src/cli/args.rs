//! Command-line argument definitions for birdstats

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the eBird statistics tool
///
/// Reads a "Download My Data" CSV export from eBird and prints checklist
/// totals followed by per-species counts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "birdstats",
    version,
    about = "Print checklist and species statistics for an eBird CSV export"
)]
pub struct Args {
    /// Path to the eBird export (MyEBirdData.csv)
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
