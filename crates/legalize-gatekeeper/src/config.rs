//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Require a matching encounter template for the origin
    pub validate_encounter: bool,

    /// Check PID shininess against the claim and the encounter's shiny policy
    pub validate_shiny: bool,

    /// Check IV/EV bounds and the encounter's flawless IV minimum
    pub validate_stats: bool,

    /// Check move count and duplicates
    pub validate_moves: bool,

    /// Check ability and gender against species data
    pub validate_species: bool,

    /// Check OT name and trade-specific provenance
    pub validate_provenance: bool,

    /// Check level bounds and origin generation
    pub validate_level: bool,

    /// Check nickname length
    pub validate_nickname: bool,

    /// OT name limit (in characters) before generation 6
    pub legacy_name_limit: usize,

    /// OT name limit (in characters) from generation 6 on
    pub modern_name_limit: usize,

    /// Nickname limit (in characters)
    pub nickname_limit: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_encounter: true,
            validate_shiny: true,
            validate_stats: true,
            validate_moves: true,
            validate_species: true,
            validate_provenance: true,
            validate_level: true,
            validate_nickname: false,
            legacy_name_limit: 7,
            modern_name_limit: 12,
            nickname_limit: 12,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            validate_encounter: false,
            validate_shiny: false,
            validate_stats: true,
            validate_moves: true,
            validate_species: false,
            validate_provenance: false,
            validate_level: true,
            validate_nickname: false,
            ..Self::default()
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self {
            validate_nickname: true,
            ..Self::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.legacy_name_limit == 0 || self.modern_name_limit == 0 {
            return Err(GatekeeperError::Config(
                "OT name limits must be > 0".to_string(),
            ));
        }
        if self.legacy_name_limit > self.modern_name_limit {
            return Err(GatekeeperError::Config(
                "legacy_name_limit must not exceed modern_name_limit".to_string(),
            ));
        }
        if self.nickname_limit == 0 {
            return Err(GatekeeperError::Config(
                "nickname_limit must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse from a TOML string; missing keys take their defaults
    pub fn from_toml(s: &str) -> Result<Self, GatekeeperError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
