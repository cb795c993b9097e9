//! Layout configuration
//!
//! Canvas size and the fixed layout constants, loaded from an optional TOML
//! file. Missing keys take the defaults below.

use crate::error::{ResumeError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Canvas and spacing parameters shared by every layout function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width in pixels, including the axis gutter
    pub width: f64,
    /// Canvas height in pixels; the time axis spans all of it
    pub height: f64,
    /// Width of the axis gutter on the left
    pub axis_width: f64,
    /// Box tops are clamped to at most `height - bottom_clamp`
    pub bottom_clamp: f64,
    /// Horizontal space kept free beside the skill bars
    pub skill_gap: f64,
    /// Compact variant: full-width boxes start 1px from the canvas edge
    /// instead of at the axis gutter
    pub compact: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 800.0,
            axis_width: 32.0,
            bottom_clamp: 25.0,
            skill_gap: 16.0,
            compact: false,
        }
    }
}

impl LayoutConfig {
    /// Read a config file, then validate it
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: LayoutConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the canvas size, keeping the other settings
    pub fn with_canvas(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        self
    }

    /// Drawable width to the right of the axis gutter
    pub fn inner_width(&self) -> f64 {
        self.width - self.axis_width
    }

    /// Reject configurations that would produce negative geometry
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.width,
            self.height,
            self.axis_width,
            self.bottom_clamp,
            self.skill_gap,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ResumeError::InvalidConfig(
                "all values must be finite numbers".to_string(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ResumeError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.axis_width < 0.0 || self.axis_width >= self.width {
            return Err(ResumeError::InvalidConfig(format!(
                "axis_width {} must be in [0, width)",
                self.axis_width
            )));
        }
        if self.bottom_clamp < 0.0 || self.bottom_clamp > self.height {
            return Err(ResumeError::InvalidConfig(format!(
                "bottom_clamp {} must be in [0, height]",
                self.bottom_clamp
            )));
        }
        if self.skill_gap < 0.0 || self.skill_gap >= self.width {
            return Err(ResumeError::InvalidConfig(format!(
                "skill_gap {} must be in [0, width)",
                self.skill_gap
            )));
        }
        Ok(())
    }
}
