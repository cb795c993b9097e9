//! Deserialization of the résumé data file
//!
//! The file is parsed into loosely typed helper structs first, then every
//! record goes through `validation` so that schema violations surface as a
//! deserialization error naming the offending value.

use super::resume_data::ResumeData;
use crate::validation::{validate_entry, validate_skills};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A timeline record exactly as it appears in the file
#[derive(Debug, Deserialize)]
struct RawTimelineEntry {
    #[serde(rename = "type")]
    entry_type: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    text: String,
    start: String,
    end: String,
    #[serde(rename = "displayWidth", alias = "display_width", default = "default_display_width")]
    display_width: i64,
}

fn default_display_width() -> i64 {
    1
}

/// Skills object, kept as an ordered list of name/level pairs
#[derive(Debug, Default)]
struct RawSkills(Vec<(String, i64)>);

impl<'de> Deserialize<'de> for RawSkills {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = RawSkills;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of skill names to integer levels")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut skills = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((skill, level)) = map.next_entry::<String, i64>()? {
                    skills.push((skill, level));
                }
                Ok(RawSkills(skills))
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

#[derive(Debug, Deserialize)]
struct ResumeDataHelper {
    timeline: Vec<RawTimelineEntry>,
    #[serde(default)]
    skills: RawSkills,
}

impl<'de> Deserialize<'de> for ResumeData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = ResumeDataHelper::deserialize(deserializer)?;

        let timeline = helper
            .timeline
            .into_iter()
            .map(|raw| {
                validate_entry(
                    &raw.entry_type,
                    raw.title,
                    raw.subtitle,
                    raw.text,
                    &raw.start,
                    &raw.end,
                    raw.display_width,
                )
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(de::Error::custom)?;
        let skills = validate_skills(helper.skills.0).map_err(de::Error::custom)?;

        ResumeData::new(timeline, skills).map_err(de::Error::custom)
    }
}
