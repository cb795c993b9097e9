//! End-to-end layout tests: data file in, geometry out

mod common;

use resume_timeline::layout::{LabelInput, calc_box_offset, calc_box_sizes, skill_bar_width};
use resume_timeline::*;

fn load(json: &str) -> ResumeData {
    let file = common::write_temp_file(json);
    Storage::new(file.path()).load().unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// box height is 800 * months / 24 on a 2019-01 .. 2021-01 axis
#[test]
fn test_box_height_on_two_year_axis() {
    let data = load(&common::data_json(
        &[
            common::entry_json("employment", "Long", "2019-01", "2021-01", 1),
            common::entry_json("employment", "Half", "2020-01", "2020-07", 1),
            common::entry_json("employment", "Short", "2020-01", "2020-06", 1),
        ],
        "{}",
    ));
    let config = LayoutConfig::default().with_canvas(None, Some(800.0));
    let layout = layout_resume(&data, &config).unwrap();

    assert_eq!(layout.scale.min_date().to_string(), "2019-01-01");
    assert_eq!(layout.scale.max_date().to_string(), "2021-01-01");
    assert_close(layout.scale.map(layout.scale.max_date()), 0.0);
    assert_close(layout.scale.map(layout.scale.min_date()), 800.0);

    assert_close(layout.entries[0].geometry.height, 800.0);
    // the longest box reaches the top of the canvas
    assert_close(layout.entries[0].geometry.y, 1.0);
    assert_close(layout.entries[1].geometry.height, 800.0 * 6.0 / 24.0);
    // end dates are the first of their month, so Jan .. Jun spans five months
    assert_close(layout.entries[2].geometry.height, 800.0 * 5.0 / 24.0);
}

#[test]
fn test_same_day_certification_has_zero_height() {
    let data = Storage::new(common::demo_data_path()).load().unwrap();
    let layout = layout_resume(&data, &LayoutConfig::default()).unwrap();
    let cert = layout
        .entries
        .iter()
        .find(|e| e.entry_type == EntryType::certification)
        .unwrap();
    assert_eq!(cert.geometry.height, 0.0);
    assert_eq!(cert.geometry.label_class, LabelClass::Normal);
}

#[test]
fn test_timeline_without_extent_is_rejected() {
    let data = load(&common::data_json(
        &[
            common::entry_json("certification", "A", "2020-05", "2020-05", 1),
            common::entry_json("certification", "B", "2020-05", "2020-05", 1),
        ],
        "{}",
    ));
    let err = layout_resume(&data, &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, ResumeError::DegenerateRange { .. }));
}

#[test]
fn test_demo_layout() {
    let data = Storage::new(common::demo_data_path()).load().unwrap();
    let config = LayoutConfig::load(common::demo_config_path()).unwrap();
    let layout = layout_resume(&data, &config).unwrap();

    assert_eq!(layout.entries.len(), 5);
    assert_eq!(layout.skills.len(), 5);
    let years: Vec<i32> = layout.ticks.iter().map(|t| t.year).collect();
    assert_eq!(years, (2013..=2024).collect::<Vec<_>>());

    for entry in &layout.entries {
        assert!(entry.geometry.height >= 0.0, "{} has negative height", entry.title);
        assert!(entry.geometry.y >= 1.0);
        assert!(entry.geometry.y <= config.height - config.bottom_clamp + 1.0);
    }

    let by_title = |title: &str, subtitle: &str| {
        layout
            .entries
            .iter()
            .find(|e| e.title == title && e.subtitle == subtitle)
            .unwrap()
    };
    let bsc = by_title("State University", "BSc Mathematics");
    assert_eq!(bsc.geometry.x, 32.0);
    assert_eq!(bsc.geometry.width, 466.0);
    assert_eq!(bsc.geometry.label_class, LabelClass::Large);

    let cert = by_title("Certified Kubernetes Administrator", "CNCF");
    assert_eq!(cert.geometry.label_class, LabelClass::Normal);
    assert_eq!(cert.geometry.title_baseline_y, 15.0);
    assert_eq!(cert.box_class, "timeline-edu");

    let job = by_title("Northwind Logistics", "Senior Software Engineer");
    assert_eq!(job.geometry.x, 344.0);
    assert_eq!(job.box_class, "timeline-emp");
    assert_eq!(job.title_class, "timeline-title");
}

#[test]
fn test_offsets_use_three_bands() {
    let config = LayoutConfig::default();
    let inner = config.inner_width();
    let bands = [
        config.axis_width,
        config.axis_width + inner / 3.0,
        config.axis_width + inner * 2.0 / 3.0,
    ];
    for entry_type in [
        EntryType::employment,
        EntryType::education,
        EntryType::certification,
    ] {
        for width in [DisplayWidth::SINGLE, DisplayWidth::FULL] {
            let x = calc_box_offset(entry_type, width, &config);
            assert!(bands.contains(&x), "{entry_type} width {} gave {x}", width.units());
        }
    }
    assert!(DisplayWidth::try_from(2).is_err());
}

#[test]
fn test_label_rule_examples() {
    let cases = [
        (
            EntryType::certification,
            DisplayWidth::SINGLE,
            5.0,
            "Cert",
            (LabelClass::Normal, 15.0, 28.0),
        ),
        (
            EntryType::employment,
            DisplayWidth::FULL,
            50.0,
            "Acme",
            (LabelClass::Large, 20.0, 40.0),
        ),
        (
            EntryType::employment,
            DisplayWidth::SINGLE,
            30.0,
            "Acme",
            (LabelClass::Small, 11.0, 20.0),
        ),
        (
            EntryType::education,
            DisplayWidth::SINGLE,
            40.0,
            "A very very very long job title",
            (LabelClass::Small, 11.0, 20.0),
        ),
    ];
    for (entry_type, display_width, box_height, title, expected) in cases {
        let fit = calc_box_sizes(&LabelInput {
            entry_type,
            display_width,
            box_height,
            title,
            subtitle: "Role",
        });
        assert_eq!(
            (fit.class, fit.title_baseline_y, fit.subtitle_baseline_y),
            expected,
            "{entry_type} h={box_height} title={title}"
        );
    }
}

#[test]
fn test_skill_width_scales_with_level() {
    let config = LayoutConfig::default();
    let one = SkillLevel::new("Rust", 1).unwrap();
    let five = SkillLevel::new("Rust", 5).unwrap();
    assert_close(skill_bar_width(five, &config), 5.0 * skill_bar_width(one, &config));
}

#[test]
fn test_layout_rejects_invalid_config() {
    let data = Storage::new(common::demo_data_path()).load().unwrap();
    let config = LayoutConfig::default().with_canvas(Some(10.0), None);
    let err = layout_resume(&data, &config).unwrap_err();
    assert!(matches!(err, ResumeError::InvalidConfig(_)));
}

#[test]
fn test_json_output_shape() {
    let data = Storage::new(common::demo_data_path()).load().unwrap();
    let layout = layout_resume(&data, &LayoutConfig::default()).unwrap();
    let json = serde_json::to_value(&layout).unwrap();

    let first = &json["entries"][0];
    assert_eq!(first["entry_type"], "employment");
    assert_eq!(first["label_class"], "normal");
    assert!(first["x"].is_number());
    assert!(first["title_baseline_y"].is_number());
    assert_eq!(json["skills"][0]["level"], 5);
    assert_eq!(json["skills"][0]["class_name"], "skill skill5");
}
