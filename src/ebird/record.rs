//! Decoded eBird observation record

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT, columns};

/// One row of MyEBirdData.csv
///
/// All fields except `line` are the raw column text; type conversion happens
/// during aggregation so errors can cite the line they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Line in the CSV file (the header is line 1)
    pub line: usize,
    pub submission_id: String,
    pub common_name: String,
    pub scientific_name: String,
    pub taxonomic_order: String,
    /// "X" or integer
    pub count: String,
    pub state_province: String,
    pub county: String,
    pub location_id: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    /// YYYY-MM-DD
    pub date: String,
    /// 07:00 AM
    pub time: String,
    pub protocol: String,
    pub duration_min: String,
    /// "1" means yes
    pub all_obs_reported: String,
    pub distance_traveled_km: String,
    pub area_covered_ha: String,
    pub number_of_observers: String,
    pub breeding_code: String,
    pub observation_details: String,
    pub checklist_comments: String,
    /// Space separated Macaulay Library asset ids
    pub ml_catalog_numbers: String,
}

impl Record {
    /// Decode a data row using the header mapping
    pub fn from_row(line: usize, row: &StringRecord, mapping: &ColumnMapping) -> Self {
        let field = |name: &str| mapping.field(row, name).to_string();

        Self {
            line,
            submission_id: field(columns::SUBMISSION_ID),
            common_name: field(columns::COMMON_NAME),
            scientific_name: field(columns::SCIENTIFIC_NAME),
            taxonomic_order: field(columns::TAXONOMIC_ORDER),
            count: field(columns::COUNT),
            state_province: field(columns::STATE_PROVINCE),
            county: field(columns::COUNTY),
            location_id: field(columns::LOCATION_ID),
            location: field(columns::LOCATION),
            latitude: field(columns::LATITUDE),
            longitude: field(columns::LONGITUDE),
            date: field(columns::DATE),
            time: field(columns::TIME),
            protocol: field(columns::PROTOCOL),
            duration_min: field(columns::DURATION_MIN),
            all_obs_reported: field(columns::ALL_OBS_REPORTED),
            distance_traveled_km: field(columns::DISTANCE_TRAVELED_KM),
            area_covered_ha: field(columns::AREA_COVERED_HA),
            number_of_observers: field(columns::NUMBER_OF_OBSERVERS),
            breeding_code: field(columns::BREEDING_CODE),
            observation_details: field(columns::OBSERVATION_DETAILS),
            checklist_comments: field(columns::CHECKLIST_COMMENTS),
            ml_catalog_numbers: field(columns::ML_CATALOG_NUMBERS),
        }
    }

    /// When the observation was made.
    ///
    /// Records without a start time (incidental and historical checklists)
    /// resolve to midnight of their date.
    pub fn observed(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        if self.time.is_empty() {
            let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)?;
            Ok(date.and_time(chrono::NaiveTime::MIN))
        } else {
            NaiveDateTime::parse_from_str(&format!("{} {}", self.date, self.time), DATE_TIME_FORMAT)
        }
    }
}
