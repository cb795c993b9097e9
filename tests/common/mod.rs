//! Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Path of the bundled demo data file
pub fn demo_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data.json")
}

/// Path of the bundled demo layout config
pub fn demo_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/layout.toml")
}

/// Write `content` to a temporary file that lives as long as the handle
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// JSON object for one timeline entry
pub fn entry_json(entry_type: &str, title: &str, start: &str, end: &str, width: i64) -> String {
    format!(
        r#"{{"type": "{}", "title": "{}", "subtitle": "Role", "text": "", "start": "{}", "end": "{}", "displayWidth": {}}}"#,
        entry_type, title, start, end, width
    )
}

/// Complete data file with the given entries and skills object
pub fn data_json(entries: &[String], skills: &str) -> String {
    format!(
        r#"{{"timeline": [{}], "skills": {}}}"#,
        entries.join(", "),
        skills
    )
}
