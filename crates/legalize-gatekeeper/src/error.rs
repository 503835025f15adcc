//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to parse a configuration file
    #[error("Failed to parse validation TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
