use crate::resume::ResumeData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-only access to a résumé data file (`data.json`)
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the data file
    ///
    /// Any failure is fatal for rendering: there is no partial result.
    pub fn load(&self) -> Result<ResumeData> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let data: ResumeData = serde_json::from_str(&content)
            .with_context(|| format!("Invalid résumé data in {}", self.file_path.display()))?;
        info!(
            path = %self.file_path.display(),
            entries = data.timeline().len(),
            skills = data.skills().len(),
            "loaded résumé data"
        );
        Ok(data)
    }
}
