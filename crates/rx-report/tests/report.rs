//! Integration tests for report output.

use std::fs;

use rx_model::{DrugStatistics, RankedEntry};
use rx_report::{REPORT_HEADER, write_report, write_report_to};

fn entry(name: &str, prescribers: u64, cost: i64) -> RankedEntry {
    RankedEntry::new(
        name,
        DrugStatistics {
            prescriber_count: prescribers,
            total_cost: cost,
        },
    )
}

fn sample_entries() -> Vec<RankedEntry> {
    vec![
        entry("CHLORPROMAZINE", 2, 3000),
        entry("BENZTROPINE MESYLATE", 1, 1500),
        entry("AMBIEN", 2, 300),
    ]
}

#[test]
fn report_matches_expected_layout() {
    let mut buffer = Vec::new();
    write_report_to(&mut buffer, &sample_entries()).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    insta::assert_snapshot!(text, @r"
    drug_name,num_prescriber,total_cost
    CHLORPROMAZINE,2,3000
    BENZTROPINE MESYLATE,1,1500
    AMBIEN,2,300
    ");
}

#[test]
fn header_names_are_fixed() {
    assert_eq!(REPORT_HEADER, ["drug_name", "num_prescriber", "total_cost"]);
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("top_cost_drug.txt");
    write_report(&path, &sample_entries()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "drug_name,num_prescriber,total_cost");
    assert_eq!(lines[3], "AMBIEN,2,300");
}

#[test]
fn overwrites_existing_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("top_cost_drug.txt");
    fs::write(&path, "stale contents\nmore\nlines\nhere\nand\nmore\n").unwrap();
    write_report(&path, &[entry("AMBIEN", 1, 5)]).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "drug_name,num_prescriber,total_cost\nAMBIEN,1,5\n"
    );
}
