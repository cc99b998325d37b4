use anyhow::{anyhow, Result};
use jam_utils::dejsonify;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorkerSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log: String,
    pub json: bool,
    pub explore_bonus: bool,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            log: "info".to_string(),
            json: false,
            explore_bonus: true,
        }
    }
}

/// Loads settings from a json string or a path to a `.json` file.
pub fn load_settings(settings: &str) -> Result<WorkerSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .map_err(|e| anyhow!("Failed to read settings file '{}': {}", settings, e))?
    } else {
        settings.to_string()
    };

    dejsonify::<WorkerSettings>(&settings).map_err(|e| anyhow!("Failed to parse settings: {}", e))
}
