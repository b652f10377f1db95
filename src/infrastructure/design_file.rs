//! Reading design states and breakdown records from disk.
//!
//! Files ending in `.json` are parsed as JSON; anything else is YAML.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::domain::models::{BreakdownRecord, DesignState};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {what} JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {what} YAML in {}", path.display()))
    }
}

/// Load a design state. Structural validation happens in the estimator, not here.
pub fn load_design(path: impl AsRef<Path>) -> Result<DesignState> {
    let path = path.as_ref();
    let design: DesignState = read_document(path, "design")?;
    tracing::debug!(path = %path.display(), design = %design.name, "Loaded design state");
    Ok(design)
}

/// Load a previously emitted or recorded breakdown. Unknown keys are rejected.
pub fn load_record(path: impl AsRef<Path>) -> Result<BreakdownRecord> {
    read_document(path.as_ref(), "breakdown record")
}
