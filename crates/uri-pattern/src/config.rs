// File: src/config.rs
// Purpose: Route conflict validator configuration, parsed from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::validate::Severity;

/// Route conflict validator configuration
///
/// ```toml
/// severity = "WARNING"
/// normalize_methods = false
/// event_id = "RouteConflict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Severity stamped on every conflict event (default: DANGER)
    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Whether HTTP methods are grouped case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub normalize_methods: bool,

    /// Identifier stamped on every conflict event
    #[serde(default = "default_event_id")]
    pub event_id: String,
}

// Default values
fn default_severity() -> Severity {
    Severity::Danger
}

fn default_true() -> bool {
    true
}

fn default_event_id() -> String {
    "HttpUriConflict".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            severity: default_severity(),
            normalize_methods: default_true(),
            event_id: default_event_id(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(content)?;
        Ok(config)
    }
}
