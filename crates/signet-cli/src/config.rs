//! Analysis configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum absolute change value for a record to count as changed
    pub threshold: f64,

    /// Magnitude at which node colors saturate at their extreme
    pub color_max: f64,

    /// Antibody reference table file name, relative to the data directory
    pub antibody_file: String,

    /// Measurement matrix file name, relative to the data directory
    pub matrix_file: String,

    /// Site-effect knowledge-base file name; optional, resolved effects fall
    /// back to the annotation when the file is absent
    pub effects_file: String,

    /// Upstream-regulator table file name; optional, no edges are produced
    /// for genes without entries
    pub regulators_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            color_max: 2.0,
            antibody_file: "abdata.txt".to_string(),
            matrix_file: "data-merged.txt".to_string(),
            effects_file: "site-effects.txt".to_string(),
            regulators_file: "regulators.txt".to_string(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.threshold < 0.0 {
            return Err("threshold must be non-negative".to_string());
        }
        if self.color_max <= 0.0 {
            return Err("color_max must be positive".to_string());
        }
        for (name, value) in [
            ("antibody_file", &self.antibody_file),
            ("matrix_file", &self.matrix_file),
        ] {
            if value.is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        Self::from_toml(&text)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
