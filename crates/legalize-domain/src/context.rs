//! Target context a record is synthesized for

use crate::{GameVersion, LanguageId, ProvenanceIdentity};

/// The destination save context
///
/// Synthesis only considers origins whose generation does not exceed the
/// context's generation, and tries the context's own version first.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetContext {
    /// Destination version
    pub version: GameVersion,
    /// Owner of the destination save, if known
    pub trainer: Option<ProvenanceIdentity>,
}

impl TargetContext {
    /// Create a context for a version with no known owner
    pub fn new(version: GameVersion) -> Self {
        Self {
            version,
            trainer: None,
        }
    }

    /// Attach the destination save's owner
    pub fn with_trainer(mut self, trainer: ProvenanceIdentity) -> Self {
        self.trainer = Some(trainer);
        self
    }

    /// Generation of the destination version
    pub fn generation(&self) -> u8 {
        self.version.generation()
    }

    /// Language of the destination owner, if known
    pub fn language(&self) -> Option<LanguageId> {
        self.trainer.as_ref().map(|t| t.language)
    }
}
