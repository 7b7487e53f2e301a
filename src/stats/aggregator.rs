//! Accumulation of per-submission and per-species statistics

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Duration;
use tracing::{debug, trace, warn};

use super::field_parsers::{count_media_assets, parse_count, parse_distance_km, parse_duration};
use super::totals::Totals;
use crate::constants::{KM_TO_MILES, columns};
use crate::ebird::Record;
use crate::{Error, Result};

/// Per-checklist statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionStats {
    /// Number of rows seen for this checklist
    pub species: usize,
    /// Distance from the first row of the checklist
    pub distance_km: f64,
    /// Duration from the first row of the checklist
    pub duration: Duration,
}

/// Per-species statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesStats {
    pub common_name: String,
    /// Number of rows seen for this species
    pub submissions: usize,
    /// Sum of reported counts
    pub count: u64,
    /// Number of photos and recordings
    pub media_assets: usize,
}

/// Single-pass accumulator over an eBird record stream
#[derive(Debug, Default)]
pub struct Aggregator {
    submissions: BTreeMap<String, SubmissionStats>,
    species: BTreeMap<String, SpeciesStats>,
    first_observed: Option<NaiveDateTime>,
    last_observed: Option<NaiveDateTime>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running statistics
    pub fn add(&mut self, record: &Record) -> Result<()> {
        // Distance and duration are checklist-level and repeated on every
        // row; only the first row of a checklist is read.
        let submission = match self.submissions.entry(record.submission_id.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let submission = SubmissionStats {
                    species: 0,
                    distance_km: parse_distance_km(record)?,
                    duration: parse_duration(record)?,
                };
                debug!(
                    "New submission {} at line {}: {} km, {} min",
                    record.submission_id,
                    record.line,
                    submission.distance_km,
                    submission.duration.as_secs() / 60
                );
                entry.insert(submission)
            }
        };
        submission.species += 1;

        let count = parse_count(record)?;
        let species = self
            .species
            .entry(record.scientific_name.clone())
            .or_insert_with(|| {
                trace!("New species {} ({})", record.scientific_name, record.common_name);
                SpeciesStats {
                    common_name: record.common_name.clone(),
                    submissions: 0,
                    count: 0,
                    media_assets: 0,
                }
            });
        species.submissions += 1;
        species.count = species.count.checked_add(count).ok_or_else(|| {
            Error::field_parse(
                record.line,
                columns::COUNT,
                record.count.as_str(),
                "species total overflows",
            )
        })?;
        species.media_assets += count_media_assets(record);

        self.track_observed(record);
        Ok(())
    }

    /// Fold every record of a stream, stopping at the first error
    pub fn extend<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Record>,
    {
        for record in records {
            self.add(&record)?;
        }
        Ok(())
    }

    fn track_observed(&mut self, record: &Record) {
        let observed = match record.observed() {
            Ok(observed) => observed,
            Err(e) => {
                warn!(
                    "Line {}: could not parse observation date '{} {}': {}",
                    record.line, record.date, record.time, e
                );
                return;
            }
        };

        if self.first_observed.is_none_or(|first| observed < first) {
            self.first_observed = Some(observed);
        }
        if self.last_observed.is_none_or(|last| observed > last) {
            self.last_observed = Some(observed);
        }
    }

    /// Statistics by submission id, in ascending id order
    pub fn submissions(&self) -> &BTreeMap<String, SubmissionStats> {
        &self.submissions
    }

    /// Statistics by scientific name, in ascending name order
    pub fn species(&self) -> &BTreeMap<String, SpeciesStats> {
        &self.species
    }

    /// Earliest and latest parseable observation times
    pub fn observed_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.first_observed.zip(self.last_observed)
    }

    /// Reduce the submissions to grand totals.
    ///
    /// Fails when no submissions were seen, since averages would be undefined.
    pub fn totals(&self) -> Result<Totals> {
        if self.submissions.is_empty() {
            return Err(Error::NoObservations);
        }

        // Summed in id order so the float total is reproducible
        let (total_km, total_duration) = self.submissions.values().try_fold(
            (0.0, Duration::ZERO),
            |(km, duration), submission| {
                let duration = duration
                    .checked_add(submission.duration)
                    .ok_or(Error::Overflow { field: "duration" })?;
                Ok::<_, Error>((km + submission.distance_km, duration))
            },
        )?;

        Ok(Totals {
            species: self.species.len(),
            submissions: self.submissions.len(),
            total_km,
            total_miles: total_km * KM_TO_MILES,
            total_duration,
        })
    }
}
