//! Registry error types

use thiserror::Error;

/// Errors that can occur while loading trainer configuration
#[derive(Error, Debug)]
pub enum RegistryConfigError {
    /// Failed to read config file
    #[error("Failed to read trainer file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse trainer TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A trainer entry could not be turned into an identity
    #[error("Invalid trainer entry #{index}: {reason}")]
    InvalidEntry {
        /// Position of the entry in the file
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}
