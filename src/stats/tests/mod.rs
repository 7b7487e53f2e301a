//! Test utilities for statistics accumulation

use crate::ebird::Record;


/// Helper to create a record with the fields aggregation reads
pub fn create_test_record(
    line: usize,
    submission_id: &str,
    scientific_name: &str,
    count: &str,
) -> Record {
    Record {
        line,
        submission_id: submission_id.to_string(),
        scientific_name: scientific_name.to_string(),
        common_name: format!("Common {}", scientific_name),
        count: count.to_string(),
        date: "2024-05-18".to_string(),
        time: "07:00 AM".to_string(),
        ..Default::default()
    }
}

/// Helper to create a record carrying checklist effort fields
pub fn create_effort_record(
    line: usize,
    submission_id: &str,
    scientific_name: &str,
    distance_km: &str,
    duration_min: &str,
) -> Record {
    Record {
        distance_traveled_km: distance_km.to_string(),
        duration_min: duration_min.to_string(),
        ..create_test_record(line, submission_id, scientific_name, "1")
    }
}
