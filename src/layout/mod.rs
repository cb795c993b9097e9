//! Timeline and skill bar geometry
//!
//! Pure functions from résumé data plus a [`LayoutConfig`] to pixel
//! geometry. Every step receives its inputs explicitly and returns its
//! result; nothing is cached between calls.
//! - `scale`: date to vertical pixel mapping and year ticks
//! - `boxes`: box rectangles and whole-timeline layout
//! - `labels`: label size heuristic
//! - `skills`: skill bar widths

mod boxes;
mod labels;
mod scale;
mod skills;

pub use boxes::{
    EntryLayout, LayoutResult, box_class, box_height, box_top, box_width, calc_box_offset,
    layout_entry, layout_timeline,
};
pub use labels::{LabelClass, LabelFit, LabelInput, calc_box_sizes, matching_rule};
pub use scale::{TimeScale, YearTick};
pub use skills::{SkillBar, layout_skills, skill_bar_width};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::resume::ResumeData;
use serde::Serialize;
use tracing::info;

/// Complete geometry for one résumé
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeLayout {
    pub scale: TimeScale,
    pub ticks: Vec<YearTick>,
    pub entries: Vec<EntryLayout>,
    pub skills: Vec<SkillBar>,
}

/// Lay out the timeline, axis ticks and skill bars of a résumé
pub fn layout_resume(data: &ResumeData, config: &LayoutConfig) -> Result<ResumeLayout> {
    config.validate()?;
    let scale = TimeScale::from_entries(data.timeline(), config.height)?;
    let layout = ResumeLayout {
        ticks: scale.year_ticks(),
        entries: layout_timeline(data.timeline(), &scale, config),
        skills: layout_skills(data.skills(), config),
        scale,
    };
    info!(
        entries = layout.entries.len(),
        skills = layout.skills.len(),
        from = %scale.min_date(),
        to = %scale.max_date(),
        "résumé layout computed"
    );
    Ok(layout)
}
