//! Record validation logic

use crate::{GatekeeperError, ValidationConfig};
use legalize_domain::encounter::EncounterKind;
use legalize_domain::stats::{MAX_EV, MAX_EV_TOTAL, MAX_IV};
use legalize_domain::{
    EncounterTemplate, Gender, GameVersion, LanguageId, Record, ShinyPolicy, SpeciesEntry, Stat,
    ValidatorOracle, Verdict,
};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Result of record validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the record passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,

    /// Template the record was matched against, if one was found
    pub encounter: Option<&'static EncounterTemplate>,
}

impl ValidationResult {
    /// Whether the record was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }

    /// Human-readable report listing every reason
    pub fn report(&self) -> String {
        if self.reasons.is_empty() {
            return match self.encounter {
                Some(t) => format!("Valid ({} {} @ {})", t.version, t.kind.as_str(), t.met_location),
                None => "Valid".to_string(),
            };
        }
        self.reasons
            .iter()
            .map(|r| format!("Invalid: {}", r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Record accepted
    Accepted,

    /// Record rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Species or form has no reference data
    UnknownSpecies(String),

    /// No encounter template matches the claimed origin
    EncounterMismatch {
        /// Claimed origin version
        origin: GameVersion,
        /// Claimed met location
        met_location: u16,
        /// Claimed met level
        met_level: u8,
    },

    /// PID shininess disagrees with the record's shiny flag
    ShinyMismatch {
        /// Shiny flag on the record
        claimed: bool,
    },

    /// Encounter's shiny policy forbids the record's shininess
    ShinyPolicy {
        /// Policy of the matched encounter
        policy: ShinyPolicy,
        /// Shiny flag on the record
        shiny: bool,
    },

    /// An IV exceeds the maximum
    IvOutOfRange {
        /// Offending stat
        stat: Stat,
        /// Value found
        value: u8,
    },

    /// An EV exceeds the per-stat maximum
    EvOutOfRange {
        /// Offending stat
        stat: Stat,
        /// Value found
        value: u8,
    },

    /// EVs exceed the total maximum
    EvTotalExceeded(u16),

    /// Encounter guarantees more perfect IVs than the record has
    TooFewFlawlessIvs {
        /// Guaranteed by the encounter
        required: u8,
        /// Present on the record
        actual: u8,
    },

    /// Move count outside 1..=4
    MoveCount(usize),

    /// Same move listed twice
    DuplicateMove(String),

    /// Ability not available to the species or form
    AbilityUnavailable(String),

    /// Gender not possible for the species or form
    GenderUnavailable(Gender),

    /// OT name empty or too long
    InvalidOtName {
        /// Name as given
        name: String,
        /// Description of the issue
        issue: String,
    },

    /// In-game trade with an OT name the trade never uses
    TradeOtMismatch(String),

    /// In-game trade with the wrong language
    TradeLanguageMismatch {
        /// Language fixed by the trade
        expected: LanguageId,
        /// Language on the record
        actual: LanguageId,
    },

    /// Level (or met level) outside the allowed range
    LevelOutOfRange {
        /// Current level
        level: u8,
        /// Met level
        met_level: u8,
    },

    /// Origin generation is newer than the record's generation
    GenerationMismatch {
        /// Generation of the origin version
        origin: u8,
        /// Generation the record claims to be in
        record: u8,
    },

    /// Nickname too long or blank
    InvalidNickname(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::UnknownSpecies(s) => write!(f, "unknown species '{}'", s),
            RejectionReason::EncounterMismatch {
                origin,
                met_location,
                met_level,
            } => write!(
                f,
                "no encounter in {} at location {} for met level {}",
                origin, met_location, met_level
            ),
            RejectionReason::ShinyMismatch { claimed } => {
                write!(f, "shiny flag {} does not match PID", claimed)
            }
            RejectionReason::ShinyPolicy { policy, shiny } => {
                write!(f, "encounter shiny policy {:?} forbids shiny={}", policy, shiny)
            }
            RejectionReason::IvOutOfRange { stat, value } => {
                write!(f, "{} IV {} exceeds {}", stat.as_str(), value, MAX_IV)
            }
            RejectionReason::EvOutOfRange { stat, value } => {
                write!(f, "{} EV {} exceeds {}", stat.as_str(), value, MAX_EV)
            }
            RejectionReason::EvTotalExceeded(total) => {
                write!(f, "EV total {} exceeds {}", total, MAX_EV_TOTAL)
            }
            RejectionReason::TooFewFlawlessIvs { required, actual } => write!(
                f,
                "encounter guarantees {} perfect IVs, record has {}",
                required, actual
            ),
            RejectionReason::MoveCount(n) => write!(f, "{} moves (expected 1 to 4)", n),
            RejectionReason::DuplicateMove(m) => write!(f, "duplicate move '{}'", m),
            RejectionReason::AbilityUnavailable(a) => write!(f, "ability '{}' not available", a),
            RejectionReason::GenderUnavailable(g) => write!(f, "gender {} not possible", g.as_str()),
            RejectionReason::InvalidOtName { name, issue } => {
                write!(f, "OT name '{}': {}", name, issue)
            }
            RejectionReason::TradeOtMismatch(name) => {
                write!(f, "in-game trade never has OT '{}'", name)
            }
            RejectionReason::TradeLanguageMismatch { expected, actual } => write!(
                f,
                "in-game trade must be {}, record is {}",
                expected, actual
            ),
            RejectionReason::LevelOutOfRange { level, met_level } => {
                write!(f, "level {} / met level {} out of range", level, met_level)
            }
            RejectionReason::GenerationMismatch { origin, record } => write!(
                f,
                "origin generation {} is newer than record generation {}",
                origin, record
            ),
            RejectionReason::InvalidNickname(n) => write!(f, "invalid nickname '{}'", n),
        }
    }
}

/// The Gatekeeper validates records against reference data
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper after checking the configuration
    pub fn try_new(config: ValidationConfig) -> Result<Self, GatekeeperError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a record against the configured rules
    ///
    /// Every enabled rule runs; the result lists all failures rather than
    /// stopping at the first.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut reasons = Vec::new();
        let encounter = find_encounter(record);

        // 1. Encounter match
        if self.config.validate_encounter && encounter.is_none() {
            reasons.push(RejectionReason::EncounterMismatch {
                origin: record.origin_version,
                met_location: record.met_location,
                met_level: record.met_level,
            });
        }

        // 2. Shininess
        if self.config.validate_shiny {
            reasons.extend(self.validate_shiny(record, encounter));
        }

        // 3. Stat bounds
        if self.config.validate_stats {
            reasons.extend(self.validate_stats(record, encounter));
        }

        // 4. Moves
        if self.config.validate_moves {
            reasons.extend(self.validate_moves(record));
        }

        // 5. Species data
        if self.config.validate_species {
            reasons.extend(self.validate_species(record));
        }

        // 6. Provenance
        if self.config.validate_provenance {
            reasons.extend(self.validate_provenance(record, encounter));
        }

        // 7. Level and generation
        if self.config.validate_level {
            reasons.extend(self.validate_level(record));
        }

        if self.config.validate_nickname {
            reasons.extend(self.validate_nickname(record));
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        debug!(
            species = %record.display_species(),
            origin = %record.origin_version,
            accepted = reasons.is_empty(),
            reasons = reasons.len(),
            "Validated record"
        );

        ValidationResult {
            status,
            reasons,
            encounter,
        }
    }

    fn validate_shiny(
        &self,
        record: &Record,
        encounter: Option<&EncounterTemplate>,
    ) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        if record.shiny != record.is_shiny_by_pid() {
            reasons.push(RejectionReason::ShinyMismatch {
                claimed: record.shiny,
            });
        }
        if let Some(t) = encounter {
            if !t.shiny.allows(record.shiny) {
                reasons.push(RejectionReason::ShinyPolicy {
                    policy: t.shiny,
                    shiny: record.shiny,
                });
            }
        }
        reasons
    }

    fn validate_stats(
        &self,
        record: &Record,
        encounter: Option<&EncounterTemplate>,
    ) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();

        for stat in Stat::ALL {
            let iv = record.ivs.get(stat);
            if iv > MAX_IV {
                reasons.push(RejectionReason::IvOutOfRange { stat, value: iv });
            }
            let ev = record.evs.get(stat);
            if ev > MAX_EV {
                reasons.push(RejectionReason::EvOutOfRange { stat, value: ev });
            }
        }

        let total = record.evs.total();
        if total > MAX_EV_TOTAL {
            reasons.push(RejectionReason::EvTotalExceeded(total));
        }

        if let Some(t) = encounter {
            let actual = record.ivs.count_equal(MAX_IV) as u8;
            if actual < t.flawless_ivs {
                reasons.push(RejectionReason::TooFewFlawlessIvs {
                    required: t.flawless_ivs,
                    actual,
                });
            }
        }

        reasons
    }

    fn validate_moves(&self, record: &Record) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        let count = record.moves.len();
        if !(1..=4).contains(&count) {
            reasons.push(RejectionReason::MoveCount(count));
        }

        let mut seen = HashSet::new();
        for name in &record.moves {
            if !seen.insert(name.trim().to_lowercase()) {
                reasons.push(RejectionReason::DuplicateMove(name.clone()));
            }
        }
        reasons
    }

    fn validate_species(&self, record: &Record) -> Vec<RejectionReason> {
        let Some(entry) = SpeciesEntry::lookup(&record.species, record.form.as_deref()) else {
            return vec![RejectionReason::UnknownSpecies(record.display_species())];
        };

        let mut reasons = Vec::new();
        if !entry.has_ability(&record.ability) {
            reasons.push(RejectionReason::AbilityUnavailable(record.ability.clone()));
        }
        if !entry.gender.allows(record.gender) {
            reasons.push(RejectionReason::GenderUnavailable(record.gender));
        }
        reasons
    }

    fn validate_provenance(
        &self,
        record: &Record,
        encounter: Option<&EncounterTemplate>,
    ) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        let name = &record.trainer.ot_name;
        let limit = if record.origin_version.generation() < 6 {
            self.config.legacy_name_limit
        } else {
            self.config.modern_name_limit
        };

        let length = name.chars().count();
        if name.trim().is_empty() {
            reasons.push(RejectionReason::InvalidOtName {
                name: name.clone(),
                issue: "empty".to_string(),
            });
        } else if length > limit {
            reasons.push(RejectionReason::InvalidOtName {
                name: name.clone(),
                issue: format!("{} characters exceeds {}", length, limit),
            });
        }

        if let Some(t) = encounter.filter(|t| t.kind == EncounterKind::Trade) {
            if !t.ot_names.is_empty() && !t.ot_names.contains(&name.as_str()) {
                reasons.push(RejectionReason::TradeOtMismatch(name.clone()));
            }
            if let Some(expected) = t.fixed_language {
                if record.language != expected {
                    reasons.push(RejectionReason::TradeLanguageMismatch {
                        expected,
                        actual: record.language,
                    });
                }
            }
        }

        reasons
    }

    fn validate_level(&self, record: &Record) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        if !(1..=100).contains(&record.level)
            || record.met_level == 0
            || record.met_level > record.level
        {
            reasons.push(RejectionReason::LevelOutOfRange {
                level: record.level,
                met_level: record.met_level,
            });
        }

        let origin = record.origin_version.generation();
        if origin == 0 || origin > record.generation {
            reasons.push(RejectionReason::GenerationMismatch {
                origin,
                record: record.generation,
            });
        }
        reasons
    }

    fn validate_nickname(&self, record: &Record) -> Option<RejectionReason> {
        let nickname = record.nickname.as_ref()?;
        let length = nickname.chars().count();
        if nickname.trim().is_empty() || length > self.config.nickname_limit {
            return Some(RejectionReason::InvalidNickname(nickname.clone()));
        }
        None
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ValidatorOracle for Gatekeeper {
    fn evaluate(&self, record: &Record) -> Verdict {
        let result = self.validate(record);
        if result.is_accepted() {
            Verdict::accept(result.report())
        } else {
            Verdict::reject(result.report())
        }
    }
}

/// First template consistent with the record's origin, location, and met level
///
/// Wild encounters accept any met level from the template's level up; every
/// other kind fixes the met level exactly.
fn find_encounter(record: &Record) -> Option<&'static EncounterTemplate> {
    EncounterTemplate::for_origin(&record.species, record.form.as_deref(), record.origin_version)
        .find(|t| {
            t.met_location == record.met_location
                && match t.kind {
                    EncounterKind::Wild => t.met_level <= record.met_level,
                    _ => t.met_level == record.met_level,
                }
        })
}
