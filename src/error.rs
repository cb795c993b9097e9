//! Error type for résumé data and layout failures
//!
//! Everything here is a data or programmer error: the layout engine never
//! retries and never renders partial output when one of these is raised.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating résumé data or building its layout
#[derive(Debug, Error, PartialEq)]
pub enum ResumeError {
    #[error("Invalid date '{0}'. Use YYYY-MM, YYYY-MM-DD or an RFC 3339 timestamp (e.g., '2020-06')")]
    InvalidDate(String),

    #[error("Invalid entry type '{0}'. Valid types: employment, education, certification")]
    InvalidEntryType(String),

    #[error("Unsupported display width {0}. Valid widths: 1 (one column) or 3 (full width)")]
    UnsupportedDisplayWidth(i64),

    #[error("Skill '{skill}' has level {level}. Levels must be between 1 and 5")]
    SkillLevelOutOfRange { skill: String, level: i64 },

    #[error("Entry '{title}' ends ({end}) before it starts ({start})")]
    InvertedDates {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Timeline has no entries")]
    EmptyTimeline,

    #[error("Time range {min} .. {max} is empty, cannot build a time scale")]
    DegenerateRange { min: NaiveDate, max: NaiveDate },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, ResumeError>;
