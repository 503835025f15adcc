//! Command implementations.

pub mod generate;
pub mod init;
pub mod trainers;

pub use self::generate::execute_generate;
pub use self::init::execute_init;
pub use self::trainers::execute_trainers;

use crate::error::{CliError, Result};
use legalize_domain::GameVersion;
use legalize_registry::{ProvenanceRegistry, TrainerConfig};
use std::path::Path;

/// Registry seeded from a trainer file, or empty without one.
pub fn load_registry(path: Option<&Path>) -> Result<ProvenanceRegistry> {
    match path {
        Some(path) => {
            let config = TrainerConfig::from_file(path)?;
            Ok(ProvenanceRegistry::from_config(&config)?)
        }
        None => Ok(ProvenanceRegistry::new()),
    }
}

/// Parse a version argument (name or numeric id).
pub fn parse_version(raw: &str) -> Result<GameVersion> {
    match GameVersion::parse(raw) {
        Some(GameVersion::Any) | None => {
            Err(CliError::InvalidInput(format!("Unknown version: {}", raw)))
        }
        Some(version) => Ok(version),
    }
}
