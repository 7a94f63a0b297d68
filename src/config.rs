//! Local configuration naming the calendar to clear.
//!
//! Read from a JSON file (`config.json` by default):
//!
//! ```json
//! { "target_calendar_id": "abc123@group.calendar.google.com" }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ClearConfig {
    pub target_calendar_id: String,
}

impl ClearConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at {}", path.display());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!(path = %path.display(), calendar = %config.target_calendar_id, "loaded config");

        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: ClearConfig = serde_json::from_str(contents)?;

        if config.target_calendar_id.trim().is_empty() {
            anyhow::bail!("target_calendar_id must not be empty");
        }

        Ok(config)
    }
}
