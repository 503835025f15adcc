//! Reference encounter templates
//!
//! Each template describes one way a species can originate in one version:
//! where it was met, at what level, and which constraints (shininess, fixed
//! IVs, trade identity) the encounter imposes. The synthesizer draws its
//! per-origin defaults from here and the gatekeeper checks records against
//! the same data.

use crate::{GameVersion, LanguageId};

/// Location id used for in-game trades from generation 6 onward
pub const LINK_TRADE_NPC: u16 = 30001;

/// How the encounter is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterKind {
    /// Wild encounter
    Wild,
    /// Fixed overworld encounter
    Static,
    /// In-game trade
    Trade,
    /// Distribution event
    Event,
}

impl EncounterKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EncounterKind::Wild => "wild",
            EncounterKind::Static => "static",
            EncounterKind::Trade => "trade",
            EncounterKind::Event => "event",
        }
    }
}

/// Shininess constraint of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShinyPolicy {
    /// Either
    Random,
    /// Shiny locked
    Never,
    /// Always shiny
    Always,
}

impl ShinyPolicy {
    /// Whether a record with the given shininess satisfies the policy
    pub fn allows(&self, shiny: bool) -> bool {
        match self {
            ShinyPolicy::Random => true,
            ShinyPolicy::Never => !shiny,
            ShinyPolicy::Always => shiny,
        }
    }
}

/// One encounter a record can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterTemplate {
    /// Species name
    pub species: &'static str,
    /// Form suffix
    pub form: Option<&'static str>,
    /// Origin version
    pub version: GameVersion,
    /// Encounter kind
    pub kind: EncounterKind,
    /// Met location id
    pub met_location: u16,
    /// Met level
    pub met_level: u8,
    /// Shininess constraint
    pub shiny: ShinyPolicy,
    /// Minimum number of IVs guaranteed at 31
    pub flawless_ivs: u8,
    /// Record language forced by the encounter (trades)
    pub fixed_language: Option<LanguageId>,
    /// Accepted original trainer names (trades); empty means any
    pub ot_names: &'static [&'static str],
}

const fn wild(
    species: &'static str,
    form: Option<&'static str>,
    version: GameVersion,
    met_location: u16,
    met_level: u8,
) -> EncounterTemplate {
    EncounterTemplate {
        species,
        form,
        version,
        kind: EncounterKind::Wild,
        met_location,
        met_level,
        shiny: ShinyPolicy::Random,
        flawless_ivs: 0,
        fixed_language: None,
        ot_names: &[],
    }
}

const fn fixed(
    species: &'static str,
    version: GameVersion,
    kind: EncounterKind,
    met_location: u16,
    met_level: u8,
    shiny: ShinyPolicy,
    flawless_ivs: u8,
) -> EncounterTemplate {
    EncounterTemplate {
        species,
        form: None,
        version,
        kind,
        met_location,
        met_level,
        shiny,
        flawless_ivs,
        fixed_language: None,
        ot_names: &[],
    }
}

const fn trade(
    species: &'static str,
    version: GameVersion,
    met_level: u8,
    language: LanguageId,
    ot_names: &'static [&'static str],
) -> EncounterTemplate {
    EncounterTemplate {
        species,
        form: None,
        version,
        kind: EncounterKind::Trade,
        met_location: LINK_TRADE_NPC,
        met_level,
        shiny: ShinyPolicy::Never,
        flawless_ivs: 0,
        fixed_language: Some(language),
        ot_names,
    }
}

use crate::version::GameVersion as V;
use EncounterKind::{Event, Static};
use ShinyPolicy::{Always, Never, Random};

const MEISTER: &[&str] = &["Meister", "マイスター"];

const ENCOUNTERS: &[EncounterTemplate] = &[
    // Pikachu
    wild("Pikachu", None, V::X, 10, 3),
    wild("Pikachu", None, V::Y, 10, 3),
    wild("Pikachu", None, V::US, 8, 6),
    wild("Pikachu", None, V::UM, 8, 6),
    wild("Pikachu", None, V::SW, 122, 3),
    wild("Pikachu", None, V::SH, 122, 3),
    // Eevee
    wild("Eevee", None, V::SW, 102, 4),
    wild("Eevee", None, V::SH, 102, 4),
    wild("Eevee", None, V::BD, 218, 16),
    wild("Eevee", None, V::SP, 218, 16),
    // Magikarp
    wild("Magikarp", None, V::X, 8, 10),
    wild("Magikarp", None, V::Y, 8, 10),
    wild("Magikarp", None, V::US, 8, 10),
    wild("Magikarp", None, V::UM, 8, 10),
    wild("Magikarp", None, V::SW, 12, 5),
    wild("Magikarp", None, V::SH, 12, 5),
    wild("Magikarp", None, V::BD, 217, 10),
    wild("Magikarp", None, V::SP, 217, 10),
    trade("Magikarp", V::BD, 20, LanguageId::German, MEISTER),
    trade("Magikarp", V::SP, 20, LanguageId::German, MEISTER),
    // Darkrai
    fixed("Darkrai", V::D, Event, 75, 40, Never, 0),
    fixed("Darkrai", V::P, Event, 75, 40, Never, 0),
    fixed("Darkrai", V::Pt, Event, 75, 40, Never, 0),
    fixed("Darkrai", V::B, Event, 40003, 50, Random, 0),
    fixed("Darkrai", V::W, Event, 40003, 50, Random, 0),
    fixed("Darkrai", V::US, Static, 232, 60, Random, 3),
    fixed("Darkrai", V::UM, Static, 232, 60, Random, 3),
    fixed("Darkrai", V::BD, Static, 150, 50, Never, 3),
    fixed("Darkrai", V::SP, Static, 150, 50, Never, 3),
    // Genesect
    fixed("Genesect", V::B2, Event, 40001, 100, Always, 0),
    fixed("Genesect", V::W2, Event, 40001, 100, Always, 0),
    fixed("Genesect", V::US, Event, 40001, 100, Never, 3),
    fixed("Genesect", V::UM, Event, 40001, 100, Never, 3),
    // Meowstic
    wild("Meowstic", None, V::X, 22, 12),
    wild("Meowstic", None, V::Y, 22, 12),
    wild("Meowstic", None, V::US, 40, 20),
    wild("Meowstic", None, V::UM, 40, 20),
    wild("Meowstic", Some("F"), V::X, 22, 12),
    wild("Meowstic", Some("F"), V::Y, 22, 12),
    wild("Meowstic", Some("F"), V::US, 40, 20),
    wild("Meowstic", Some("F"), V::UM, 40, 20),
];

impl EncounterTemplate {
    /// Whether the template describes the given species and form
    pub fn matches(&self, species: &str, form: Option<&str>) -> bool {
        self.species.eq_ignore_ascii_case(species.trim())
            && match (self.form, form) {
                (None, None) => true,
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b.trim()),
                _ => false,
            }
    }

    /// All templates for a species and form, in table order
    pub fn for_species<'a>(
        species: &'a str,
        form: Option<&'a str>,
    ) -> impl Iterator<Item = &'static EncounterTemplate> + 'a {
        ENCOUNTERS.iter().filter(move |t| t.matches(species, form))
    }

    /// Templates for a species and form in one version
    pub fn for_origin<'a>(
        species: &'a str,
        form: Option<&'a str>,
        version: GameVersion,
    ) -> impl Iterator<Item = &'static EncounterTemplate> + 'a {
        Self::for_species(species, form).filter(move |t| t.version == version)
    }

    /// Every known template
    pub fn all() -> &'static [EncounterTemplate] {
        ENCOUNTERS
    }
}
