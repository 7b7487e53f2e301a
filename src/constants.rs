//! Application constants for birdstats
//!
//! Column names of the "Download My Data" eBird export, parsing sentinels
//! and report layout values.

// =============================================================================
// eBird Export Columns
// =============================================================================

/// Header names as they appear in MyEBirdData.csv
pub mod columns {
    pub const SUBMISSION_ID: &str = "Submission ID";
    pub const COMMON_NAME: &str = "Common Name";
    pub const SCIENTIFIC_NAME: &str = "Scientific Name";
    pub const TAXONOMIC_ORDER: &str = "Taxonomic Order";
    pub const COUNT: &str = "Count";
    pub const STATE_PROVINCE: &str = "State/Province";
    pub const COUNTY: &str = "County";
    pub const LOCATION_ID: &str = "Location ID";
    pub const LOCATION: &str = "Location";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const DATE: &str = "Date";
    pub const TIME: &str = "Time";
    pub const PROTOCOL: &str = "Protocol";
    pub const DURATION_MIN: &str = "Duration (Min)";
    pub const ALL_OBS_REPORTED: &str = "All Obs Reported";
    pub const DISTANCE_TRAVELED_KM: &str = "Distance Traveled (km)";
    pub const AREA_COVERED_HA: &str = "Area Covered (ha)";
    pub const NUMBER_OF_OBSERVERS: &str = "Number of Observers";
    pub const BREEDING_CODE: &str = "Breeding Code";
    pub const OBSERVATION_DETAILS: &str = "Observation Details";
    pub const CHECKLIST_COMMENTS: &str = "Checklist Comments";
    pub const ML_CATALOG_NUMBERS: &str = "ML Catalog Numbers";
}

// =============================================================================
// Field Parsing
// =============================================================================

/// Count value meaning "present, number not recorded"
pub const COUNT_PRESENT_MARKER: &str = "X";

/// Observation date format (2024-05-18)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Observation date and time format (2024-05-18 07:00 AM)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

// =============================================================================
// Reporting
// =============================================================================

/// Kilometres to statute miles
pub const KM_TO_MILES: f64 = 0.621371;

/// Width of the rule between the summary and the species table
pub const REPORT_RULE_WIDTH: usize = 80;

/// Log target used by the default tracing filter
pub const LOG_TARGET: &str = "birdstats";
