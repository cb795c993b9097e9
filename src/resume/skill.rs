use crate::error::{ResumeError, Result};
use serde::Serialize;

/// Proficiency on a 1 to 5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw level for the named skill
    pub fn new(skill: &str, level: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(ResumeError::SkillLevelOutOfRange {
                skill: skill.to_string(),
                level,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

/// A named skill and its level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub skill: String,
    pub level: SkillLevel,
}

impl SkillEntry {
    pub fn new(skill: impl Into<String>, level: i64) -> Result<Self> {
        let skill = skill.into();
        let level = SkillLevel::new(&skill, level)?;
        Ok(Self { skill, level })
    }
}
