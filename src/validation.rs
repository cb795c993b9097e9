//! Validation helper functions for résumé data
//!
//! This module contains the checks applied at the load boundary: entry type
//! names, display widths, date pairs and skill levels. Malformed input fails
//! here instead of propagating into layout arithmetic.

use crate::dates::normalize_date;
use crate::error::{ResumeError, Result};
use crate::resume::{DisplayWidth, EntryType, SkillEntry, TimelineEntry};
use chrono::NaiveDate;

/// Parse and validate an entry type name
///
/// # Arguments
/// * `type_str` - One of `employment`, `education`, `certification`
pub fn parse_entry_type(type_str: &str) -> Result<EntryType> {
    type_str.trim().parse::<EntryType>()
}

/// Validate a display width
///
/// # Returns
/// The width tier, or `UnsupportedDisplayWidth` for anything but 1 and 3
pub fn parse_display_width(width: i64) -> Result<DisplayWidth> {
    DisplayWidth::try_from(width)
}

/// Parse a start/end date pair and check their order
///
/// # Arguments
/// * `title` - Entry title, used in the error message
/// * `start_str` - Start date string
/// * `end_str` - End date string
pub fn parse_date_range(
    title: &str,
    start_str: &str,
    end_str: &str,
) -> Result<(NaiveDate, NaiveDate)> {
    let start = normalize_date(start_str)?;
    let end = normalize_date(end_str)?;
    if end < start {
        return Err(ResumeError::InvertedDates {
            title: title.to_string(),
            start,
            end,
        });
    }
    Ok((start, end))
}

/// Build a validated timeline entry from raw field values
pub fn validate_entry(
    type_str: &str,
    title: String,
    subtitle: String,
    text: String,
    start_str: &str,
    end_str: &str,
    display_width: i64,
) -> Result<TimelineEntry> {
    let entry_type = parse_entry_type(type_str)?;
    let display_width = parse_display_width(display_width)?;
    let (start, end) = parse_date_range(&title, start_str, end_str)?;
    let entry = TimelineEntry::new(entry_type, title, subtitle, start, end, display_width)?;
    Ok(entry.with_text(text))
}

/// Build validated skill entries, keeping their order
pub fn validate_skills(raw: Vec<(String, i64)>) -> Result<Vec<SkillEntry>> {
    raw.into_iter()
        .map(|(skill, level)| SkillEntry::new(skill, level))
        .collect()
}
