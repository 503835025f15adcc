//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Trainer file error
    #[error(transparent)]
    Trainers(#[from] legalize_registry::RegistryConfigError),

    /// Validator configuration error
    #[error(transparent)]
    Validation(#[from] legalize_gatekeeper::GatekeeperError),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] legalize_synthesizer::SynthesisFailure),

    /// Some requests in a batch failed
    #[error("{failed} of {total} specification(s) could not be synthesized")]
    Incomplete {
        /// Failed requests
        failed: usize,
        /// All requests
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
