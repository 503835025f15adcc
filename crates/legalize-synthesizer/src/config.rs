//! Configuration for the Synthesizer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Maximum oracle calls per synthesis
    pub max_attempts: usize,

    /// Wall-clock budget per synthesis in milliseconds (0 = unbounded)
    pub time_budget_ms: u64,

    /// Level used when the specification does not name one
    pub default_level: u8,
}

impl SynthesizerConfig {
    /// Get the time budget as a Duration, if bounded
    pub fn time_budget(&self) -> Option<Duration> {
        (self.time_budget_ms > 0).then(|| Duration::from_millis(self.time_budget_ms))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if !(1..=100).contains(&self.default_level) {
            return Err("default_level must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

impl Default for SynthesizerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_attempts: 64,
            time_budget_ms: 0,
            default_level: 100,
        }
    }
}

impl SynthesizerConfig {
    /// Fast preset: few attempts and a short deadline
    pub fn fast() -> Self {
        Self {
            max_attempts: 16,
            time_budget_ms: 250,
            default_level: 100,
        }
    }

    /// Exhaustive preset: effectively try every candidate
    pub fn exhaustive() -> Self {
        Self {
            max_attempts: 4096,
            time_budget_ms: 0,
            default_level: 100,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
