use crate::error::{ResumeError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a timeline entry
///
/// Uses lowercase naming to match the `type` field of the data file.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// A job; drawn in the rightmost column
    employment,
    /// A course of study; drawn in the middle column
    education,
    /// A certificate; drawn in the leftmost column with a fixed label layout
    certification,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::employment => "employment",
            EntryType::education => "education",
            EntryType::certification => "certification",
        }
    }
}

impl FromStr for EntryType {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "employment" => Ok(EntryType::employment),
            "education" => Ok(EntryType::education),
            "certification" => Ok(EntryType::certification),
            _ => Err(ResumeError::InvalidEntryType(s.to_string())),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal sizing tier of an entry's box, in thirds of the drawable width
///
/// Only one column (1) and full width (3) exist. A two-column tier has no
/// horizontal placement rule, so it cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub struct DisplayWidth(u8);

impl DisplayWidth {
    pub const SINGLE: DisplayWidth = DisplayWidth(1);
    pub const FULL: DisplayWidth = DisplayWidth(3);

    /// Number of thirds this box spans
    pub fn units(self) -> u8 {
        self.0
    }

    pub fn is_full(self) -> bool {
        self == Self::FULL
    }
}

impl TryFrom<i64> for DisplayWidth {
    type Error = ResumeError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Self::SINGLE),
            3 => Ok(Self::FULL),
            other => Err(ResumeError::UnsupportedDisplayWidth(other)),
        }
    }
}

impl From<DisplayWidth> for u8 {
    fn from(width: DisplayWidth) -> Self {
        width.0
    }
}

/// One employment, education or certification record
///
/// Dates are normalized calendar dates and `start <= end` always holds for
/// entries produced by [`TimelineEntry::new`] or by loading a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub entry_type: EntryType,
    /// Employer, school or certificate name
    pub title: String,
    /// Role or degree
    pub subtitle: String,
    /// Free-form description shown in the details section
    pub text: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub display_width: DisplayWidth,
}

impl TimelineEntry {
    /// Create an entry, rejecting an end date that precedes the start
    pub fn new(
        entry_type: EntryType,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        display_width: DisplayWidth,
    ) -> Result<Self> {
        let title = title.into();
        if end < start {
            return Err(ResumeError::InvertedDates { title, start, end });
        }
        Ok(Self {
            entry_type,
            title,
            subtitle: subtitle.into(),
            text: String::new(),
            start,
            end,
            display_width,
        })
    }

    /// Attach the details text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn is_employment(&self) -> bool {
        self.entry_type == EntryType::employment
    }

    pub fn is_certification(&self) -> bool {
        self.entry_type == EntryType::certification
    }
}
