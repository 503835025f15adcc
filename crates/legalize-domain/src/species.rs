//! Reference species data

use crate::Gender;

/// Which genders a species (form) can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderPolicy {
    /// Always genderless
    Genderless,
    /// Always female
    FemaleOnly,
    /// Always male
    MaleOnly,
    /// Either male or female
    Dual,
}

impl GenderPolicy {
    /// Whether `gender` is allowed under this policy
    pub fn allows(&self, gender: Gender) -> bool {
        match self {
            GenderPolicy::Genderless => gender == Gender::Genderless,
            GenderPolicy::FemaleOnly => gender == Gender::Female,
            GenderPolicy::MaleOnly => gender == Gender::Male,
            GenderPolicy::Dual => gender != Gender::Genderless,
        }
    }

    /// Gender chosen when a request leaves it open
    pub fn default_gender(&self) -> Gender {
        match self {
            GenderPolicy::Genderless => Gender::Genderless,
            GenderPolicy::FemaleOnly => Gender::Female,
            GenderPolicy::MaleOnly | GenderPolicy::Dual => Gender::Male,
        }
    }
}

/// Species (and form) level data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesEntry {
    /// Species name
    pub name: &'static str,
    /// Form suffix (`None` for the base form)
    pub form: Option<&'static str>,
    /// Abilities this form can have
    pub abilities: &'static [&'static str],
    /// Gender policy
    pub gender: GenderPolicy,
}

const SPECIES: &[SpeciesEntry] = &[
    SpeciesEntry {
        name: "Pikachu",
        form: None,
        abilities: &["Static", "Lightning Rod"],
        gender: GenderPolicy::Dual,
    },
    SpeciesEntry {
        name: "Eevee",
        form: None,
        abilities: &["Run Away", "Adaptability", "Anticipation"],
        gender: GenderPolicy::Dual,
    },
    SpeciesEntry {
        name: "Magikarp",
        form: None,
        abilities: &["Swift Swim", "Rattled"],
        gender: GenderPolicy::Dual,
    },
    SpeciesEntry {
        name: "Darkrai",
        form: None,
        abilities: &["Bad Dreams"],
        gender: GenderPolicy::Genderless,
    },
    SpeciesEntry {
        name: "Genesect",
        form: None,
        abilities: &["Download"],
        gender: GenderPolicy::Genderless,
    },
    SpeciesEntry {
        name: "Meowstic",
        form: None,
        abilities: &["Keen Eye", "Infiltrator", "Prankster"],
        gender: GenderPolicy::MaleOnly,
    },
    SpeciesEntry {
        name: "Meowstic",
        form: Some("F"),
        abilities: &["Keen Eye", "Infiltrator", "Competitive"],
        gender: GenderPolicy::FemaleOnly,
    },
];

impl SpeciesEntry {
    /// Look up a species and form (case-insensitive)
    pub fn lookup(name: &str, form: Option<&str>) -> Option<&'static SpeciesEntry> {
        SPECIES.iter().find(|s| {
            s.name.eq_ignore_ascii_case(name.trim())
                && match (s.form, form) {
                    (None, None) => true,
                    (Some(a), Some(b)) => a.eq_ignore_ascii_case(b.trim()),
                    _ => false,
                }
        })
    }

    /// Resolve a display name such as `"Meowstic-F"` into species and form
    pub fn resolve(display: &str) -> Option<&'static SpeciesEntry> {
        let display = display.trim();
        if let Some(entry) = Self::lookup(display, None) {
            return Some(entry);
        }
        let (name, form) = display.split_once('-')?;
        Self::lookup(name, Some(form))
    }

    /// Whether the form can have `ability`
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ability.trim()))
    }

    /// Every known species entry
    pub fn all() -> &'static [SpeciesEntry] {
        SPECIES
    }
}
