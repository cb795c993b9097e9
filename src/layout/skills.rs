use crate::config::LayoutConfig;
use crate::resume::{SkillEntry, SkillLevel};
use serde::Serialize;

/// A skill bar ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub skill: String,
    pub level: SkillLevel,
    pub width: f64,
    pub class_name: String,
}

/// Width of a bar for `level`: a fifth of the usable width per level
///
/// Levels are validated on load, so no clamping happens here.
pub fn skill_bar_width(level: SkillLevel, config: &LayoutConfig) -> f64 {
    (config.width - config.skill_gap) / SkillLevel::MAX as f64 * level.value() as f64
}

/// Lay out every skill in input order
pub fn layout_skills(skills: &[SkillEntry], config: &LayoutConfig) -> Vec<SkillBar> {
    skills
        .iter()
        .map(|entry| SkillBar {
            skill: entry.skill.clone(),
            level: entry.level,
            width: skill_bar_width(entry.level, config),
            class_name: format!("skill skill{}", entry.level.value()),
        })
        .collect()
}
