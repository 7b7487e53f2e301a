//! birdstats library
//!
//! Statistics for eBird "Download My Data" CSV exports: distance and time
//! spent across checklists, and per-species counts and media.
//!
//! This library provides tools for:
//! - Decoding exports by header name, tolerating reordered columns and short rows
//! - Accumulating per-checklist and per-species statistics in one pass
//! - Rendering a plain-text summary and species table

pub mod constants;
pub mod ebird;
pub mod error;
pub mod report;
pub mod stats;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use ebird::{Record, Records, read_records};
pub use error::{Error, Result};
pub use report::Report;
pub use stats::{Aggregator, SpeciesStats, SubmissionStats, Totals};
