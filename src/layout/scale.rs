use crate::dates::month_position;
use crate::error::{ResumeError, Result};
use crate::resume::{TimelineEntry, date_bounds};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Inverted linear mapping from calendar dates to vertical pixels
///
/// The most recent date sits at `y = 0` and the earliest at `y = height`, so
/// time flows bottom to top. Dates are placed on a month-linear axis where
/// every month has the same height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeScale {
    min_date: NaiveDate,
    max_date: NaiveDate,
    /// Domain bounds in axis units (months)
    min_pos: f64,
    max_pos: f64,
    height: f64,
}

/// A labelled year boundary on the axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearTick {
    pub year: i32,
    pub y: f64,
}

impl TimeScale {
    /// Build a scale with `map(max_date) == 0` and `map(min_date) == height`
    ///
    /// A domain without extent (every entry starts and ends on the same date)
    /// has no usable mapping and is rejected.
    pub fn new(min_date: NaiveDate, max_date: NaiveDate, height: f64) -> Result<Self> {
        let min_pos = month_position(min_date);
        let max_pos = month_position(max_date);
        if max_pos <= min_pos {
            return Err(ResumeError::DegenerateRange {
                min: min_date,
                max: max_date,
            });
        }
        Ok(Self {
            min_date,
            max_date,
            min_pos,
            max_pos,
            height,
        })
    }

    /// Build the scale covering every entry: earliest start to latest end
    pub fn from_entries(entries: &[TimelineEntry], height: f64) -> Result<Self> {
        let (min, max) = date_bounds(entries).ok_or(ResumeError::EmptyTimeline)?;
        Self::new(min, max, height)
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixels per month
    pub fn month_height(&self) -> f64 {
        self.height / (self.max_pos - self.min_pos)
    }

    /// Vertical position of an axis coordinate (in months)
    pub fn map_position(&self, pos: f64) -> f64 {
        (self.max_pos - pos) * self.month_height()
    }

    /// Vertical position of a date
    pub fn map(&self, date: NaiveDate) -> f64 {
        self.map_position(month_position(date))
    }

    /// Axis coordinate (in months) shown at vertical position `y`
    pub fn invert(&self, y: f64) -> f64 {
        self.max_pos - y / self.month_height()
    }

    /// One tick per 1 January inside the domain, oldest first
    pub fn year_ticks(&self) -> Vec<YearTick> {
        let first = if self.min_date.month() == 1 && self.min_date.day() == 1 {
            self.min_date.year()
        } else {
            self.min_date.year() + 1
        };
        (first..)
            .map_while(|year| {
                let pos = year as f64 * 12.0;
                (pos <= self.max_pos).then(|| YearTick {
                    year,
                    y: self.map_position(pos),
                })
            })
            .collect()
    }
}
