//! Checklist and species statistics for eBird exports
//!
//! Records are folded by submission id and by scientific name in a single
//! pass, then reduced to grand totals.
//!
//! - [`aggregator`] - Running per-submission and per-species accumulation
//! - [`field_parsers`] - Conversion of raw record fields
//! - [`totals`] - Grand totals and averages

pub mod aggregator;
pub mod field_parsers;
pub mod totals;

#[cfg(test)]
pub mod tests;

pub use aggregator::{Aggregator, SpeciesStats, SubmissionStats};
pub use totals::Totals;
