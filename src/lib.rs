//! Résumé Timeline Library
//!
//! This library turns a résumé data file into drawable geometry: boxes on a
//! vertical time axis for jobs, education and certifications, a skills bar
//! chart, and a textual details section. Drawing itself is left to the
//! caller; everything here is a pure function of the data and a
//! [`LayoutConfig`].
//!
//! # Architecture
//!
//! - **Domain Layer**: `resume` module - validated entries and skills
//! - **Layout Layer**: `layout` module - time scale, boxes, labels, skill bars
//! - **Loading Layer**: `storage` module - reads `data.json`, fails fast
//!
//! # Example
//!
//! ```no_run
//! use resume_timeline::{LayoutConfig, Storage, layout_resume};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = Storage::new("data.json").load()?;
//!     let layout = layout_resume(&data, &LayoutConfig::default())?;
//!     for entry in &layout.entries {
//!         println!("{} at y={}", entry.title, entry.geometry.y);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod formatting;
pub mod layout;
pub mod resume;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use error::ResumeError;
pub use layout::{
    EntryLayout, LabelClass, LayoutResult, ResumeLayout, SkillBar, TimeScale, layout_resume,
};
pub use resume::{DisplayWidth, EntryType, ResumeData, SkillEntry, SkillLevel, TimelineEntry};
pub use storage::Storage;
