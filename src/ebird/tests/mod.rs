//! Test utilities for the eBird export decoder
//!
//! Fixtures mirror the layout of a real MyEBirdData.csv download.

use std::io::Write;
use tempfile::NamedTempFile;


/// Full header of the eBird "Download My Data" export
pub const EXPORT_HEADER: &str = "Submission ID,Common Name,Scientific Name,Taxonomic Order,Count,\
State/Province,County,Location ID,Location,Latitude,Longitude,Date,Time,Protocol,Duration (Min),\
All Obs Reported,Distance Traveled (km),Area Covered (ha),Number of Observers,Breeding Code,\
Observation Details,Checklist Comments,ML Catalog Numbers";

/// Helper to create export content with two checklists and three rows.
///
/// The second row stops after "Number of Observers", as eBird does when the
/// trailing columns are empty.
pub fn create_test_export() -> String {
    [
        EXPORT_HEADER,
        "S100000001,Mallard,Anas platyrhynchos,392,4,US-CA,Santa Clara,L123456,Shoreline Park,37.43,-122.08,\
2024-05-18,07:00 AM,eBird - Traveling Count,90,1,3.2,,1,,,\"Windy, overcast\",ML600001 ML600002",
        "S100000001,American Coot,Fulica americana,6393,X,US-CA,Santa Clara,L123456,Shoreline Park,37.43,-122.08,\
2024-05-18,07:00 AM,eBird - Traveling Count,90,1,3.2,,1",
        "S100000002,Mallard,Anas platyrhynchos,392,2,US-CA,Santa Clara,L654321,Home,37.40,-122.10,\
2024-05-19,,eBird - Casual Observation,,0,,,1,,,,ML600003",
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
