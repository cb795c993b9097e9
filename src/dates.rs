//! Date normalization and formatting
//!
//! Résumé dates are written at month granularity (`"2020-06"`), sometimes
//! with a day or a full timestamp. Parsing such a string as a UTC instant and
//! then reading it back in local time shifts negative-offset hosts into the
//! previous day (and for the 1st, the previous month). The browser fix was
//! `normalized = parsed + timezoneOffsetMinutes * 60000 ms`, which amounts to
//! keeping the UTC calendar fields of the parsed instant. We keep exactly
//! those fields as a [`NaiveDate`], so the host time zone never enters.

use crate::error::{ResumeError, Result};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

/// Parse a résumé date string into a time-zone independent calendar date
///
/// Accepted forms:
/// - `YYYY` (1 January of that year)
/// - `YYYY-MM` (1st of that month)
/// - `YYYY-MM-DD`
/// - RFC 3339 timestamps (`2020-06-01T00:00:00Z`), reduced to their UTC date
/// - naive timestamps (`2020-06-01T12:00:00`), reduced to their date
pub fn normalize_date(date_str: &str) -> Result<NaiveDate> {
    let s = date_str.trim();
    let invalid = || ResumeError::InvalidDate(date_str.to_string());

    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = s.parse().map_err(|_| invalid())?;
        return NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid);
    }
    if s.len() == 7
        && let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
    {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_utc().date());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts.date());
        }
    }
    Err(invalid())
}

/// Format a date as `YYYY-MM`, the granularity used throughout the résumé
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Position of a date on a month-linear axis
///
/// Every calendar month spans exactly 1.0, regardless of its day count.
pub fn month_position(date: NaiveDate) -> f64 {
    let whole = date.year() as f64 * 12.0 + date.month0() as f64;
    whole + date.day0() as f64 / days_in_month(date) as f64
}
