use crate::resume::{DisplayWidth, EntryType};
use serde::Serialize;

/// Font size tier of an entry's title and subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelClass {
    Normal,
    Small,
    Large,
}

impl LabelClass {
    /// Suffix appended to the `timeline-title` / `timeline-subtitle` classes
    pub fn css_suffix(self) -> &'static str {
        match self {
            LabelClass::Normal => "",
            LabelClass::Small => "-sm",
            LabelClass::Large => "-lg",
        }
    }
}

/// Label size decision: tier plus the two text baselines inside the box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelFit {
    pub class: LabelClass,
    pub title_baseline_y: f64,
    pub subtitle_baseline_y: f64,
}

impl LabelFit {
    const NORMAL: LabelFit = LabelFit::new(LabelClass::Normal, 15.0, 28.0);
    const SMALL: LabelFit = LabelFit::new(LabelClass::Small, 11.0, 20.0);
    const LARGE: LabelFit = LabelFit::new(LabelClass::Large, 20.0, 40.0);

    const fn new(class: LabelClass, title_baseline_y: f64, subtitle_baseline_y: f64) -> Self {
        Self {
            class,
            title_baseline_y,
            subtitle_baseline_y,
        }
    }
}

/// Box height above which full-width entries get large labels
const LARGE_MIN_HEIGHT: f64 = 38.0;
/// Box height below which labels shrink
const NORMAL_MIN_HEIGHT: f64 = 34.0;
const MAX_NORMAL_TITLE_CHARS: usize = 26;
const MAX_NORMAL_SUBTITLE_CHARS: usize = 30;

/// Everything the label heuristic looks at
#[derive(Debug, Clone, Copy)]
pub struct LabelInput<'a> {
    pub entry_type: EntryType,
    pub display_width: DisplayWidth,
    pub box_height: f64,
    pub title: &'a str,
    pub subtitle: &'a str,
}

type Rule = (for<'a> fn(&LabelInput<'a>) -> bool, LabelFit);

/// Ordered rules, first match wins; the last one always matches
const RULES: [Rule; 5] = [
    (|i| i.entry_type == EntryType::certification, LabelFit::NORMAL),
    (
        |i| i.display_width.is_full() && i.box_height > LARGE_MIN_HEIGHT,
        LabelFit::LARGE,
    ),
    (|i| i.box_height < NORMAL_MIN_HEIGHT, LabelFit::SMALL),
    (
        |i| {
            i.title.chars().count() > MAX_NORMAL_TITLE_CHARS
                || i.subtitle.chars().count() > MAX_NORMAL_SUBTITLE_CHARS
        },
        LabelFit::SMALL,
    ),
    (|_| true, LabelFit::NORMAL),
];

/// Index of the rule that decides `input`
pub fn matching_rule(input: &LabelInput) -> usize {
    RULES
        .iter()
        .position(|(applies, _)| applies(input))
        .unwrap_or(RULES.len() - 1)
}

/// Decide label size and baselines for a box
///
/// Certifications always use the normal single-line layout. Full-width boxes
/// taller than 38px get large labels. Otherwise boxes shorter than 34px, or
/// with a title over 26 or a subtitle over 30 characters, get small labels.
pub fn calc_box_sizes(input: &LabelInput) -> LabelFit {
    RULES[matching_rule(input)].1
}
