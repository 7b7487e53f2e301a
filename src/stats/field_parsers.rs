//! Field parsing utilities for eBird records
//!
//! Raw record fields become typed values here. Blank values are treated as
//! zero; anything else that fails to parse is an error citing the record's
//! source line.

use std::time::Duration;

use crate::constants::{COUNT_PRESENT_MARKER, columns};
use crate::ebird::Record;
use crate::{Error, Result};

/// Parse the checklist distance in kilometres
pub fn parse_distance_km(record: &Record) -> Result<f64> {
    let value = record.distance_traveled_km.as_str();
    if value.is_empty() {
        return Ok(0.0);
    }

    value
        .parse::<f64>()
        .map_err(|e| Error::field_parse(record.line, columns::DISTANCE_TRAVELED_KM, value, e))
}

/// Parse the checklist duration, recorded in whole minutes
pub fn parse_duration(record: &Record) -> Result<Duration> {
    let value = record.duration_min.as_str();
    if value.is_empty() {
        return Ok(Duration::ZERO);
    }

    let minutes = value
        .parse::<u64>()
        .map_err(|e| Error::field_parse(record.line, columns::DURATION_MIN, value, e))?;

    let secs = minutes.checked_mul(60).ok_or_else(|| {
        Error::field_parse(record.line, columns::DURATION_MIN, value, "too many minutes")
    })?;
    Ok(Duration::from_secs(secs))
}

/// Parse the number of individuals seen; "X" (present) counts as zero
pub fn parse_count(record: &Record) -> Result<u64> {
    let value = record.count.as_str();
    if value.is_empty() || value == COUNT_PRESENT_MARKER {
        return Ok(0);
    }

    value
        .parse::<u64>()
        .map_err(|e| Error::field_parse(record.line, columns::COUNT, value, e))
}

/// Count the Macaulay Library assets attached to a record.
///
/// Ids are separated by a single space; repeated spaces count the empty
/// tokens between them.
pub fn count_media_assets(record: &Record) -> usize {
    let assets = record.ml_catalog_numbers.trim();
    if assets.is_empty() {
        0
    } else {
        assets.split(' ').count()
    }
}
