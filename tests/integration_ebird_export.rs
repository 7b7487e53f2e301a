//! Integration tests for summarising eBird exports end to end
//!
//! Each test writes an export to a temporary file and runs it through the
//! same read, aggregate and report path the CLI uses.

use birdstats::cli::commands::summarise;
use birdstats::{Error, Report};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const HEADER: &str = "Submission ID,Common Name,Scientific Name,Taxonomic Order,Count,\
State/Province,County,Location ID,Location,Latitude,Longitude,Date,Time,Protocol,Duration (Min),\
All Obs Reported,Distance Traveled (km),Area Covered (ha),Number of Observers,Breeding Code,\
Observation Details,Checklist Comments,ML Catalog Numbers";

fn write_export(rows: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(temp_file, "{}", row).unwrap();
    }
    temp_file
}

/// Typical export: a traveling count with photos and an incidental sighting
#[test]
fn test_summarise_export() {
    let export = write_export(&[
        "S200000001,Black-billed Magpie,Pica hudsonia,21712,3,US-CO,Boulder,L1,Walden Ponds,40.04,-105.18,\
2024-04-02,08:15 AM,eBird - Traveling Count,120,1,4.5,,2,,,,ML100 ML101 ML102",
        "S200000001,Mallard,Anas platyrhynchos,392,X,US-CO,Boulder,L1,Walden Ponds,40.04,-105.18,\
2024-04-02,08:15 AM,eBird - Traveling Count,120,1,4.5,,2",
        "S200000002,Black-billed Magpie,Pica hudsonia,21712,1,US-CO,Boulder,L2,Yard,40.01,-105.27,\
2024-04-03,,eBird - Casual Observation,,0,,,1,,,,",
    ]);

    let aggregator = summarise(export.path()).unwrap();
    assert_eq!(aggregator.submissions().len(), 2);
    assert_eq!(aggregator.species().len(), 2);

    let magpie = &aggregator.species()["Pica hudsonia"];
    assert_eq!(magpie.common_name, "Black-billed Magpie");
    assert_eq!(magpie.submissions, 2);
    assert_eq!(magpie.count, 4);
    assert_eq!(magpie.media_assets, 3);

    let report = Report::new(&aggregator).unwrap();
    let totals = report.totals();
    assert_eq!(totals.total_km, 4.5);
    assert_eq!(totals.total_miles, 4.5 * 0.621371);
    assert_eq!(totals.total_duration, Duration::from_secs(120 * 60));
    assert_eq!(totals.avg_duration(), Duration::from_secs(60 * 60));

    let rendered = report.render();
    assert!(rendered.starts_with("2 species; 2 submissions\n"));
    assert!(rendered.contains("2h0m0s total time; 1h0m0s avg time"));
    assert!(rendered.contains("Observed 2024-04-02 to 2024-04-03"));

    let table: Vec<&str> = rendered.lines().skip(6).collect();
    assert_eq!(table.len(), 2);
    assert!(table[0].starts_with("Anas platyrhynchos"));
    assert!(table[1].starts_with("Pica hudsonia"));
    assert!(table[1].ends_with("4 total 3 pics/sounds"));
}

#[test]
fn test_bad_count_reports_line_number() {
    let export = write_export(&[
        "S1,Mallard,Anas platyrhynchos,392,2,,,,,,,2024-04-02,,,,,,,,,,,",
        "S1,American Coot,Fulica americana,6393,abc,,,,,,,2024-04-02,,,,,,,,,,,",
    ]);

    let err = summarise(export.path()).unwrap_err();
    assert!(matches!(err, Error::FieldParse { line: 3, .. }));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_header_only_export_has_no_report() {
    let export = write_export(&[]);

    let aggregator = summarise(export.path()).unwrap();
    assert!(matches!(
        Report::new(&aggregator),
        Err(Error::NoObservations)
    ));
}

#[test]
fn test_empty_file_is_rejected() {
    let export = NamedTempFile::new().unwrap();

    let err = summarise(export.path()).unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_missing_file_is_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let err = summarise(&temp_dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_minimal_column_set() {
    let mut export = NamedTempFile::new().unwrap();
    writeln!(export, "Scientific Name,Submission ID,Count").unwrap();
    writeln!(export, "Pica hudsonia,S1,2").unwrap();
    writeln!(export, "Pica hudsonia,S2").unwrap();

    let aggregator = summarise(export.path()).unwrap();
    let magpie = &aggregator.species()["Pica hudsonia"];
    assert_eq!(magpie.count, 2);
    assert_eq!(magpie.submissions, 2);
    assert_eq!(magpie.common_name, "");

    let report = Report::new(&aggregator).unwrap();
    assert_eq!(report.totals().total_km, 0.0);
    assert!(!report.render().contains("Observed"));
}

/// The binary's stdout is the rendered report and nothing else
#[test]
fn test_cli_stdout_is_exactly_the_report() {
    let export = write_export(&[
        "S1,Mallard,Anas platyrhynchos,392,2,US-CO,Boulder,L1,Walden Ponds,40.04,-105.18,\
2024-04-02,08:15 AM,eBird - Traveling Count,30,1,1.5,,1,,,,ML1",
    ]);

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_birdstats"))
        .arg(export.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let aggregator = summarise(export.path()).unwrap();
    let expected = Report::new(&aggregator).unwrap().render();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, expected);
    assert!(stdout.starts_with("1 species; 1 submissions\n"));
}

/// Malformed quoting exits non-zero and prints nothing on stdout
#[test]
fn test_cli_rejects_malformed_quoting() {
    let export = write_export(&["S1,Mallard,\"Anas platyrhynchos,392,2"]);

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_birdstats"))
        .arg(export.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}
