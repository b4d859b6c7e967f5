//! Scanner configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// User-facing theme preference. Persisted with the config file,
/// independent of any scan, and irrelevant to probing correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Theme preference for presentation
    pub theme: Theme,

    /// Platform fixture file describing the host to scan. Without one the
    /// scan runs against the detached platform.
    pub fixture: Option<PathBuf>,

    /// Directory to export the JSON report into; no export when unset
    pub export_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            fixture: None,
            export_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("failed to read {path}: {e}")))?;
        toml::from_str(&content).map_err(|e| ScanError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &str) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
