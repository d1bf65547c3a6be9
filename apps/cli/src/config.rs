//! Loading settings and study sets from disk.

use std::path::Path;

use anyhow::Context;
use study_core::{StudySet, StudySettings};

/// Read settings from a JSON file, or use defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<StudySettings> {
    let Some(path) = path else {
        return Ok(StudySettings::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("invalid settings file {}", path.display()))
}

pub fn parse_settings(content: &str) -> anyhow::Result<StudySettings> {
    Ok(serde_json::from_str(content)?)
}

/// Read and validate a study set from a JSON file.
pub fn load_set(path: &Path) -> anyhow::Result<StudySet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read study set {}", path.display()))?;
    let set = parse_set(&content).with_context(|| format!("invalid study set {}", path.display()))?;
    tracing::info!(set = set.id(), cards = set.len(), "loaded study set");
    Ok(set)
}

pub fn parse_set(content: &str) -> anyhow::Result<StudySet> {
    Ok(serde_json::from_str(content)?)
}
