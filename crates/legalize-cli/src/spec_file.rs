//! Specification files.
//!
//! A specification file is a JSON or TOML object with the requested fields
//! and an optional `directives` array:
//!
//! ```toml
//! species = "Magikarp"
//! nickname = "Wilhelm"
//! level = 45
//! ivs = { HP = 3, Atk = 3, Def = 31, SpA = 11, SpD = 3, Spe = 2 }
//! directives = ["=OT_Name=Meister", ".Version=48", "~=Generation=8"]
//! ```

use crate::error::{CliError, Result};
use legalize_domain::{
    Directive, Gender, LanguageId, Nature, SpeciesEntry, Specification, Stat,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialized form of a [`Specification`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecFile {
    /// Species, optionally with a form suffix (`Meowstic-F`)
    pub species: String,
    /// Form, when not part of `species`
    pub form: Option<String>,
    /// Nickname
    pub nickname: Option<String>,
    /// Gender marker
    pub gender: Option<String>,
    /// Ability
    pub ability: Option<String>,
    /// Held item
    pub item: Option<String>,
    /// Nature name
    pub nature: Option<String>,
    /// Level
    pub level: Option<u8>,
    /// Shininess
    #[serde(default)]
    pub shiny: bool,
    /// Language name or id
    pub language: Option<String>,
    /// IVs by stat label; missing stats stay 31
    #[serde(default)]
    pub ivs: BTreeMap<String, u8>,
    /// EVs by stat label; missing stats stay 0
    #[serde(default)]
    pub evs: BTreeMap<String, u8>,
    /// Moves
    #[serde(default)]
    pub moves: Vec<String>,
    /// Directive lines
    #[serde(default)]
    pub directives: Vec<String>,
}

impl SpecFile {
    /// Read a specification file, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_json(&contents),
        }
    }

    /// Parse a JSON specification.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a TOML specification.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Convert into a domain specification.
    ///
    /// Unknown species are passed through so synthesis can report them.
    pub fn into_specification(self) -> Result<Specification> {
        let mut spec = match (&self.form, SpeciesEntry::resolve(&self.species)) {
            (None, Some(entry)) => {
                let spec = Specification::new(entry.name);
                match entry.form {
                    Some(form) => spec.with_form(form),
                    None => spec,
                }
            }
            (Some(form), _) => Specification::new(self.species.trim()).with_form(form.as_str()),
            (None, None) => Specification::new(self.species.trim()),
        };

        if let Some(nickname) = self.nickname {
            spec = spec.with_nickname(nickname);
        }
        if let Some(gender) = self.gender {
            let gender = Gender::parse(&gender)
                .ok_or_else(|| invalid("gender", &gender))?;
            spec = spec.with_gender(gender);
        }
        if let Some(ability) = self.ability {
            spec = spec.with_ability(ability);
        }
        if let Some(item) = self.item {
            spec = spec.with_item(item);
        }
        if let Some(nature) = self.nature {
            let nature = Nature::parse(&nature).ok_or_else(|| invalid("nature", &nature))?;
            spec = spec.with_nature(nature);
        }
        if let Some(level) = self.level {
            spec = spec.with_level(level);
        }
        if let Some(language) = self.language {
            let language =
                LanguageId::parse(&language).ok_or_else(|| invalid("language", &language))?;
            spec = spec.with_language(language);
        }
        for (label, value) in &self.ivs {
            spec = spec.with_iv(parse_stat(label)?, *value);
        }
        for (label, value) in &self.evs {
            spec = spec.with_ev(parse_stat(label)?, *value);
        }
        spec = spec.shiny(self.shiny).with_moves(self.moves);

        for line in &self.directives {
            let directive = Directive::parse(line).ok_or_else(|| invalid("directive", line))?;
            spec = spec.with_directive(directive);
        }

        Ok(spec)
    }
}

/// Load and convert a specification file.
pub fn load_specification(path: &Path) -> Result<Specification> {
    SpecFile::from_file(path)?.into_specification()
}

fn parse_stat(label: &str) -> Result<Stat> {
    Stat::parse(label).ok_or_else(|| invalid("stat", label))
}

fn invalid(what: &str, value: &str) -> CliError {
    CliError::InvalidInput(format!("Invalid {}: {}", what, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalize_domain::{DirectiveField, DirectiveKind, GameVersion, OriginConstraint};

    #[test]
    fn test_toml_specification() {
        let file = SpecFile::from_toml(
            r#"
species = "Magikarp"
nickname = "Wilhelm"
level = 45
language = "German"
ivs = { HP = 3, Atk = 3, Def = 31, SpA = 11, SpD = 3, Spe = 2 }
directives = ["=OT_Name=Meister", ".Version=48", "~=Generation=8"]
"#,
        )
        .unwrap();
        let spec = file.into_specification().unwrap();

        assert_eq!(spec.species, "Magikarp");
        assert_eq!(spec.nickname.as_deref(), Some("Wilhelm"));
        assert_eq!(spec.level, Some(45));
        assert_eq!(spec.language, Some(LanguageId::German));
        assert_eq!(spec.ivs.0, [3, 3, 31, 11, 3, 2]);
        assert_eq!(spec.pinned(DirectiveField::OtName), Some("Meister"));
        assert_eq!(spec.origin_version(), OriginConstraint::Fixed(GameVersion::BD));
        assert_eq!(spec.directives[2].kind, DirectiveKind::Restrict);
    }

    #[test]
    fn test_json_specification_with_form_suffix() {
        let file = SpecFile::from_json(
            r#"{
                "species": "Meowstic-F",
                "nature": "Timid",
                "evs": { "HP": 4, "SpA": 252, "Spe": 252 },
                "moves": ["Psyshock", "Calm Mind"]
            }"#,
        )
        .unwrap();
        let spec = file.into_specification().unwrap();

        assert_eq!(spec.species, "Meowstic");
        assert_eq!(spec.form.as_deref(), Some("F"));
        assert_eq!(spec.nature, Some(Nature::Timid));
        assert_eq!(spec.evs.total(), 508);
        assert_eq!(spec.ivs.0, [31; 6]);
        assert_eq!(spec.moves.len(), 2);
    }

    #[test]
    fn test_unknown_species_passes_through() {
        let file = SpecFile {
            species: "Missingno".to_string(),
            ..SpecFile::default()
        };
        assert_eq!(file.into_specification().unwrap().species, "Missingno");
    }

    #[test]
    fn test_bad_fields_are_rejected() {
        let bad_stat = SpecFile::from_json(r#"{"species": "Eevee", "ivs": {"Luck": 3}}"#).unwrap();
        assert!(matches!(bad_stat.into_specification(), Err(CliError::InvalidInput(_))));

        let bad_directive =
            SpecFile::from_json(r#"{"species": "Eevee", "directives": ["OT_Name=Meister"]}"#)
                .unwrap();
        assert!(matches!(bad_directive.into_specification(), Err(CliError::InvalidInput(_))));

        assert!(SpecFile::from_json(r#"{"species": "Eevee", "colour": "red"}"#).is_err());
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("darkrai.toml");
        fs::write(&path, "species = \"Darkrai\"\nlevel = 50\n").unwrap();

        let spec = load_specification(&path).unwrap();
        assert_eq!(spec.species, "Darkrai");
        assert_eq!(spec.level, Some(50));
    }
}
