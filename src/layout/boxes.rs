use super::labels::{LabelClass, LabelInput, calc_box_sizes};
use super::scale::TimeScale;
use crate::config::LayoutConfig;
use crate::resume::{DisplayWidth, EntryType, TimelineEntry};
use serde::Serialize;
use tracing::{debug, warn};

/// Gap left between horizontally adjacent boxes
const BOX_GAP: f64 = 2.0;
/// Inset of a box below its top edge
const BOX_INSET: f64 = 1.0;
/// Left edge of full-width boxes in the compact variant
const COMPACT_FULL_WIDTH_OFFSET: f64 = 1.0;

/// Geometry of one timeline box and its labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutResult {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_class: LabelClass,
    pub title_baseline_y: f64,
    pub subtitle_baseline_y: f64,
}

/// Left edge of an entry's box
///
/// Full-width boxes start at the gutter, or 1px from the canvas edge in the
/// compact variant. Otherwise employment takes the right third, education
/// the middle third, and anything else the left third.
pub fn calc_box_offset(
    entry_type: EntryType,
    display_width: DisplayWidth,
    config: &LayoutConfig,
) -> f64 {
    let gutter = config.axis_width;
    let inner = config.inner_width();
    if display_width.is_full() {
        return if config.compact {
            COMPACT_FULL_WIDTH_OFFSET
        } else {
            gutter
        };
    }
    match entry_type {
        EntryType::employment => gutter + inner * 2.0 / 3.0,
        EntryType::education => gutter + inner / 3.0,
        EntryType::certification => gutter,
    }
}

/// Pixel width of a box spanning `display_width` thirds
pub fn box_width(display_width: DisplayWidth, config: &LayoutConfig) -> f64 {
    (config.inner_width() / 3.0 * display_width.units() as f64).floor() - BOX_GAP
}

/// Top edge of a box, kept clear of the axis labels at the bottom
pub fn box_top(entry: &TimelineEntry, scale: &TimeScale, config: &LayoutConfig) -> f64 {
    let end_y = scale.map(entry.end);
    let limit = config.height - config.bottom_clamp;
    if end_y > limit {
        warn!(
            title = %entry.title,
            end_y,
            limit,
            "box top clamped above the bottom margin"
        );
    }
    end_y.min(limit) + BOX_INSET
}

/// Height of a box: distance between its start and end on the scale
///
/// Zero when an entry starts and ends on the same date.
pub fn box_height(entry: &TimelineEntry, scale: &TimeScale) -> f64 {
    scale.map(entry.start) - scale.map(entry.end)
}

/// Full geometry for a single entry
pub fn layout_entry(
    entry: &TimelineEntry,
    scale: &TimeScale,
    config: &LayoutConfig,
) -> LayoutResult {
    let height = box_height(entry, scale);
    let fit = calc_box_sizes(&LabelInput {
        entry_type: entry.entry_type,
        display_width: entry.display_width,
        box_height: height,
        title: &entry.title,
        subtitle: &entry.subtitle,
    });
    let result = LayoutResult {
        x: calc_box_offset(entry.entry_type, entry.display_width, config),
        y: box_top(entry, scale, config),
        width: box_width(entry.display_width, config),
        height,
        label_class: fit.class,
        title_baseline_y: fit.title_baseline_y,
        subtitle_baseline_y: fit.subtitle_baseline_y,
    };
    debug!(
        title = %entry.title,
        x = result.x,
        y = result.y,
        width = result.width,
        height = result.height,
        label = ?result.label_class,
        "laid out timeline box"
    );
    result
}

/// A laid out entry together with the text and classes a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryLayout {
    pub entry_type: EntryType,
    pub title: String,
    pub subtitle: String,
    pub box_class: &'static str,
    pub title_class: String,
    pub subtitle_class: String,
    #[serde(flatten)]
    pub geometry: LayoutResult,
}

impl EntryLayout {
    pub fn new(entry: &TimelineEntry, geometry: LayoutResult) -> Self {
        let suffix = geometry.label_class.css_suffix();
        Self {
            entry_type: entry.entry_type,
            title: entry.title.clone(),
            subtitle: entry.subtitle.clone(),
            box_class: box_class(entry.entry_type),
            title_class: format!("timeline-title{}", suffix),
            subtitle_class: format!("timeline-subtitle{}", suffix),
            geometry,
        }
    }
}

/// Style class of a box: employment is highlighted, everything else shares one
pub fn box_class(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::employment => "timeline-emp",
        _ => "timeline-edu",
    }
}

/// Lay out every entry against one shared scale, in input order
pub fn layout_timeline(
    entries: &[TimelineEntry],
    scale: &TimeScale,
    config: &LayoutConfig,
) -> Vec<EntryLayout> {
    entries
        .iter()
        .map(|entry| EntryLayout::new(entry, layout_entry(entry, scale, config)))
        .collect()
}
