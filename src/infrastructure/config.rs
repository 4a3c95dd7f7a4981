// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON configuration for the client (`config.json`). Wire names follow the
/// service's convention, every field has a default, and a missing file is not
/// an error.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(rename = "apiUrl", default = "default_api_url")]
    pub api_url: String,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?;

        debug!(?path, ?config, "Loaded configuration");
        Ok(config)
    }

    /// Resolve configuration: an explicitly given path must exist; otherwise
    /// the first of `./config.json` and the user config dir that exists is
    /// used, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.json")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("noteview").join("config.json"));
        }
        paths
    }
}
