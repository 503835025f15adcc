//! Provenance identities (original trainer details)

use crate::{Gender, GameVersion, LanguageId, Record};
use std::hash::{Hash, Hasher};

/// Trainer name used when no identity can be found anywhere else
pub const DEFAULT_OT_NAME: &str = "ALM";

/// Trainer ID paired with [`DEFAULT_OT_NAME`]
pub const DEFAULT_TID: u16 = 12345;

/// Secret ID paired with [`DEFAULT_OT_NAME`]
pub const DEFAULT_SID: u16 = 54321;

/// Who a record claims to have originally come from
///
/// Structural equality covers exactly version, language, name, and both IDs.
/// The OT gender and the context version are descriptive only and do not take
/// part in deduplication.
#[derive(Debug, Clone)]
pub struct ProvenanceIdentity {
    /// Version the trainer played ([`GameVersion::Any`] if unknown)
    pub version: GameVersion,

    /// Trainer language
    pub language: LanguageId,

    /// Original trainer name
    pub ot_name: String,

    /// Trainer ID
    pub tid: u16,

    /// Secret ID
    pub sid: u16,

    /// Original trainer gender
    pub ot_gender: Gender,

    /// Version of the save file this identity was read from, if any
    pub context_version: Option<GameVersion>,
}

impl ProvenanceIdentity {
    /// Create a new identity
    pub fn new(
        version: GameVersion,
        language: LanguageId,
        ot_name: impl Into<String>,
        tid: u16,
        sid: u16,
    ) -> Self {
        Self {
            version,
            language,
            ot_name: ot_name.into(),
            tid,
            sid,
            ot_gender: Gender::Male,
            context_version: None,
        }
    }

    /// Minimal identity used when neither the registry nor the cache has one
    pub fn fallback(version: GameVersion, language: LanguageId) -> Self {
        Self::new(version, language, DEFAULT_OT_NAME, DEFAULT_TID, DEFAULT_SID)
    }

    /// Identity read from a live save file
    ///
    /// The save's version doubles as the context version, so the identity can
    /// still be bucketed if its own version is later cleared.
    pub fn from_save(
        save_version: GameVersion,
        language: LanguageId,
        ot_name: impl Into<String>,
        tid: u16,
        sid: u16,
    ) -> Self {
        Self::new(save_version, language, ot_name, tid, sid).with_context_version(save_version)
    }

    /// Deep copy of the provenance-relevant fields of a record
    pub fn from_record(record: &Record) -> Self {
        let trainer = &record.trainer;
        let version = if trainer.version == GameVersion::Any {
            record.origin_version
        } else {
            trainer.version
        };
        Self {
            version,
            language: trainer.language,
            ot_name: trainer.ot_name.clone(),
            tid: trainer.tid,
            sid: trainer.sid,
            ot_gender: trainer.ot_gender,
            context_version: None,
        }
    }

    /// Set the OT gender
    pub fn with_ot_gender(mut self, gender: Gender) -> Self {
        self.ot_gender = gender;
        self
    }

    /// Set the context version
    pub fn with_context_version(mut self, version: GameVersion) -> Self {
        self.context_version = Some(version);
        self
    }

    /// Generation of the identity's version (0 when unknown)
    pub fn generation(&self) -> u8 {
        self.bucket_version().map(GameVersion::generation).unwrap_or(0)
    }

    /// Version this identity is filed under: its own version, else the
    /// context version, else none
    pub fn bucket_version(&self) -> Option<GameVersion> {
        if self.version != GameVersion::Any {
            return Some(self.version);
        }
        self.context_version.filter(|v| *v != GameVersion::Any)
    }
}

impl PartialEq for ProvenanceIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.language == other.language
            && self.ot_name == other.ot_name
            && self.tid == other.tid
            && self.sid == other.sid
    }
}

impl Eq for ProvenanceIdentity {}

impl Hash for ProvenanceIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.language.hash(state);
        self.ot_name.hash(state);
        self.tid.hash(state);
        self.sid.hash(state);
    }
}
