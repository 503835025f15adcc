//! Trainer file parsing
//!
//! Seeds a registry from a TOML file of trainer identities:
//!
//! ```toml
//! [[trainers]]
//! version = "BD"      # name or numeric id
//! language = "German" # name, abbreviation, or numeric id
//! ot_name = "Meister"
//! tid = 12345
//! sid = 54321
//! ot_gender = "Female" # optional, defaults to Male
//! ```

use crate::error::RegistryConfigError;
use legalize_domain::{Gender, GameVersion, LanguageId, ProvenanceIdentity};
use serde::Deserialize;
use std::path::Path;

/// A value that may be written as a numeric id or as a name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdOrName {
    /// Numeric id
    Id(i64),
    /// Name or abbreviation
    Name(String),
}

impl IdOrName {
    fn to_version(&self) -> Option<GameVersion> {
        match self {
            IdOrName::Id(id) => i32::try_from(*id).ok().and_then(GameVersion::from_id),
            IdOrName::Name(name) => GameVersion::parse(name),
        }
    }

    fn to_language(&self) -> Option<LanguageId> {
        match self {
            IdOrName::Id(id) => u8::try_from(*id).ok().and_then(LanguageId::from_id),
            IdOrName::Name(name) => LanguageId::parse(name),
        }
    }
}

/// Trainer file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerConfig {
    /// Trainer entries, in file order
    #[serde(default)]
    pub trainers: Vec<TrainerEntry>,
}

/// One trainer entry
#[derive(Debug, Clone, Deserialize)]
pub struct TrainerEntry {
    /// Version the trainer played
    pub version: IdOrName,

    /// Trainer language
    pub language: IdOrName,

    /// Original trainer name
    pub ot_name: String,

    /// Trainer ID
    pub tid: u16,

    /// Secret ID
    pub sid: u16,

    /// Original trainer gender
    #[serde(default)]
    pub ot_gender: Option<String>,
}

impl TrainerConfig {
    /// Load a trainer file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse trainer TOML
    pub fn from_toml(s: &str) -> Result<Self, RegistryConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Convert every entry to an identity, failing on the first bad entry
    pub fn identities(&self) -> Result<Vec<ProvenanceIdentity>, RegistryConfigError> {
        self.trainers
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_identity(index))
            .collect()
    }
}

impl TrainerEntry {
    /// Convert to an identity; `index` is used for error reporting
    pub fn to_identity(&self, index: usize) -> Result<ProvenanceIdentity, RegistryConfigError> {
        let invalid = |reason: String| RegistryConfigError::InvalidEntry { index, reason };

        let version = self
            .version
            .to_version()
            .filter(|v| *v != GameVersion::Any)
            .ok_or_else(|| invalid(format!("unknown version {:?}", self.version)))?;

        let language = self
            .language
            .to_language()
            .ok_or_else(|| invalid(format!("unknown language {:?}", self.language)))?;

        if self.ot_name.trim().is_empty() {
            return Err(invalid("ot_name must not be empty".to_string()));
        }

        let ot_gender = match &self.ot_gender {
            None => Gender::Male,
            Some(raw) => match Gender::parse(raw) {
                Some(g @ (Gender::Male | Gender::Female)) => g,
                _ => return Err(invalid(format!("invalid ot_gender '{}'", raw))),
            },
        };

        Ok(
            ProvenanceIdentity::new(version, language, self.ot_name.clone(), self.tid, self.sid)
                .with_ot_gender(ot_gender),
        )
    }
}
