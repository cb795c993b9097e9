use crate::error::{ResumeError, Result};
use crate::resume::entry::{EntryType, TimelineEntry};
use crate::resume::skill::SkillEntry;
use chrono::NaiveDate;

/// A loaded résumé: timeline entries and skills, in file order
///
/// Built once at the load boundary and read-only afterwards. The timeline is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeData {
    pub(crate) timeline: Vec<TimelineEntry>,
    pub(crate) skills: Vec<SkillEntry>,
}

impl ResumeData {
    /// Assemble résumé data, rejecting an empty timeline
    pub fn new(timeline: Vec<TimelineEntry>, skills: Vec<SkillEntry>) -> Result<Self> {
        if timeline.is_empty() {
            return Err(ResumeError::EmptyTimeline);
        }
        Ok(Self { timeline, skills })
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    /// Entries of one category, in file order
    pub fn entries_of(&self, entry_type: EntryType) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline
            .iter()
            .filter(move |entry| entry.entry_type == entry_type)
    }

    /// Earliest start and latest end across the timeline
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_bounds(&self.timeline)
    }
}

/// Earliest start and latest end of a set of entries, `None` when empty
pub fn date_bounds(entries: &[TimelineEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let min = entries.iter().map(|e| e.start).min()?;
    let max = entries.iter().map(|e| e.end).max()?;
    Some((min, max))
}
