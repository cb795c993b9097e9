//! Résumé domain model
//!
//! - `entry`: timeline entries, their category and width tier
//! - `skill`: skills and validated levels
//! - `resume_data`: the loaded résumé container
//! - `serde_impl`: schema-checked deserialization of the data file

mod entry;
mod resume_data;
mod serde_impl;
mod skill;

pub use entry::{DisplayWidth, EntryType, TimelineEntry};
pub use resume_data::{ResumeData, date_bounds};
pub use skill::{SkillEntry, SkillLevel};
