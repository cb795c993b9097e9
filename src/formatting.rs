//! Formatting helper functions for résumé output
//!
//! This module renders the details section and a plain-text report of the
//! computed layout.

use crate::dates::format_date;
use crate::layout::ResumeLayout;
use crate::resume::{EntryType, ResumeData, TimelineEntry};
use std::fmt::Write;

/// One-line heading for an entry in the details section
pub fn format_entry_heading(entry: &TimelineEntry) -> String {
    match entry.entry_type {
        EntryType::employment => format!(
            "{} at {} from {} to {}",
            entry.subtitle,
            entry.title,
            format_date(entry.start),
            format_date(entry.end)
        ),
        EntryType::education => format!(
            "Studied {} at {} from {} to {}",
            entry.subtitle,
            entry.title,
            format_date(entry.start),
            format_date(entry.end)
        ),
        EntryType::certification => {
            format!("{} on {}", entry.title, format_date(entry.start))
        }
    }
}

/// Render the details section: employment, education, then certification
///
/// # Returns
/// Markdown-style text with one `##` heading per section. Employment entries
/// are followed by their description text when present.
pub fn format_details(data: &ResumeData) -> String {
    let sections = [
        ("Employment", EntryType::employment),
        ("Education", EntryType::education),
        ("Certification", EntryType::certification),
    ];

    let mut result = String::new();
    for (heading, entry_type) in sections {
        let _ = writeln!(result, "## {}\n", heading);
        for entry in data.entries_of(entry_type) {
            let _ = writeln!(result, "#### {}", format_entry_heading(entry));
            if entry_type == EntryType::employment && !entry.text.is_empty() {
                let _ = writeln!(result, "{}", entry.text);
            }
            result.push('\n');
        }
    }
    result
}

/// Render the computed geometry as a readable report
pub fn format_layout(layout: &ResumeLayout) -> String {
    let mut result = format!(
        "Timeline {} .. {} over {:.0}px ({} entries)\n\n",
        format_date(layout.scale.min_date()),
        format_date(layout.scale.max_date()),
        layout.scale.height(),
        layout.entries.len()
    );

    for entry in &layout.entries {
        let g = &entry.geometry;
        let _ = writeln!(
            result,
            "- [{}] {} / {}",
            entry.entry_type, entry.title, entry.subtitle
        );
        let _ = writeln!(
            result,
            "  box: x={:.1} y={:.1} w={:.1} h={:.1} ({})",
            g.x, g.y, g.width, g.height, entry.box_class
        );
        let _ = writeln!(
            result,
            "  labels: {:?} title_y={} subtitle_y={}",
            g.label_class, g.title_baseline_y, g.subtitle_baseline_y
        );
    }

    if !layout.ticks.is_empty() {
        result.push_str("\nAxis:\n");
        for tick in &layout.ticks {
            let _ = writeln!(result, "  {} at y={:.1}", tick.year, tick.y);
        }
    }

    if !layout.skills.is_empty() {
        result.push_str("\nSkills:\n");
        for bar in &layout.skills {
            let _ = writeln!(
                result,
                "  {} (level {}): width={:.1}",
                bar.skill,
                bar.level.value(),
                bar.width
            );
        }
    }

    result
}
