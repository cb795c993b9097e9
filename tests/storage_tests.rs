//! Tests for loading résumé data files

mod common;

use chrono::NaiveDate;
use resume_timeline::formatting::format_details;
use resume_timeline::*;

#[test]
fn test_load_demo_data() {
    let data = Storage::new(common::demo_data_path()).load().unwrap();
    assert_eq!(data.timeline().len(), 5);
    assert_eq!(data.entries_of(EntryType::employment).count(), 2);
    assert_eq!(data.entries_of(EntryType::certification).count(), 1);

    let (min, max) = data.date_bounds().unwrap();
    assert_eq!(min, NaiveDate::from_ymd_opt(2012, 9, 1).unwrap());
    assert_eq!(max, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    let skills: Vec<&str> = data.skills().iter().map(|s| s.skill.as_str()).collect();
    assert_eq!(skills, ["Rust", "Distributed systems", "SQL", "Python", "Frontend"]);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("data.json"));
    let err = storage.load().unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_malformed_json_is_fatal() {
    let file = common::write_temp_file("{\"timeline\": [");
    let err = Storage::new(file.path()).load().unwrap_err();
    assert!(err.to_string().starts_with("Invalid résumé data"));
}

#[test]
fn test_schema_errors_name_the_value() {
    let cases = [
        (
            common::entry_json("employment", "Acme", "2019-01", "2020-01", 2),
            "Unsupported display width 2",
        ),
        (
            common::entry_json("employment", "Acme", "2021-01", "2020-01", 1),
            "Entry 'Acme' ends (2020-01-01) before it starts (2021-01-01)",
        ),
        (
            common::entry_json("employment", "Acme", "January", "2020-01", 1),
            "Invalid date 'January'",
        ),
        (
            common::entry_json("internship", "Acme", "2019-01", "2020-01", 1),
            "Invalid entry type 'internship'",
        ),
    ];
    for (entry, expected) in cases {
        let file = common::write_temp_file(&common::data_json(&[entry], "{}"));
        let err = Storage::new(file.path()).load().unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains(expected), "{chain} should contain {expected}");
    }
}

#[test]
fn test_timestamps_keep_their_calendar_month() {
    let entry = r#"{"type": "education", "title": "Uni", "subtitle": "BSc",
        "start": "2010-09-01T00:00:00Z", "end": "2014-06-01T00:00:00Z", "displayWidth": 1}"#;
    let file = common::write_temp_file(&common::data_json(&[entry.to_string()], "{}"));
    let data = Storage::new(file.path()).load().unwrap();
    let details = format_details(&data);
    assert!(details.contains("Studied BSc at Uni from 2010-09 to 2014-06"));
}
