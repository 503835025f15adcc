//! Abstract entity specifications

use crate::{Directive, DirectiveField, Gender, GameVersion, LanguageId, Nature, Stat, StatSpread};

/// An origin constraint read from directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginConstraint<T> {
    /// No directive names this field
    Open,
    /// A directive names a usable value
    Fixed(T),
    /// A directive names this field but its value cannot be interpreted
    Unsatisfiable,
}

/// Partially specified description of a desired entity
///
/// Specifications are immutable once built; the builder methods consume and
/// return `self`.
///
/// # Examples
///
/// ```
/// use legalize_domain::{Directive, Nature, Specification, Stat};
///
/// let spec = Specification::new("Darkrai")
///     .with_ability("Bad Dreams")
///     .with_nature(Nature::Timid)
///     .with_iv(Stat::Atk, 7)
///     .shiny(true)
///     .with_moves(["Hypnosis", "Feint Attack", "Nightmare", "Double Team"])
///     .with_directive(Directive::pin("OT_Name", "Meister"));
///
/// assert_eq!(spec.moves.len(), 4);
/// assert_eq!(spec.pinned(legalize_domain::DirectiveField::OtName), Some("Meister"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    /// Species name
    pub species: String,
    /// Form suffix
    pub form: Option<String>,
    /// Nickname
    pub nickname: Option<String>,
    /// Requested gender
    pub gender: Option<Gender>,
    /// Requested ability
    pub ability: Option<String>,
    /// Held item
    pub held_item: Option<String>,
    /// Requested nature
    pub nature: Option<Nature>,
    /// Requested level
    pub level: Option<u8>,
    /// Requested shininess
    pub shiny: bool,
    /// Requested record language
    pub language: Option<LanguageId>,
    /// Individual values (default all 31)
    pub ivs: StatSpread,
    /// Effort values (default all 0)
    pub evs: StatSpread,
    /// Moves
    pub moves: Vec<String>,
    /// Override directives, in the order written
    pub directives: Vec<Directive>,
}

impl Specification {
    /// Create a specification for a species with every other field open
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            form: None,
            nickname: None,
            gender: None,
            ability: None,
            held_item: None,
            nature: None,
            level: None,
            shiny: false,
            language: None,
            ivs: StatSpread::perfect_ivs(),
            evs: StatSpread::zero(),
            moves: Vec::new(),
            directives: Vec::new(),
        }
    }

    /// Set the form
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Set the nickname
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the ability
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    /// Set the held item
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.held_item = Some(item.into());
        self
    }

    /// Set the nature
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Set shininess
    pub fn shiny(mut self, shiny: bool) -> Self {
        self.shiny = shiny;
        self
    }

    /// Set the record language
    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = Some(language);
        self
    }

    /// Set one IV
    pub fn with_iv(mut self, stat: Stat, value: u8) -> Self {
        self.ivs.set(stat, value);
        self
    }

    /// Set one EV
    pub fn with_ev(mut self, stat: Stat, value: u8) -> Self {
        self.evs.set(stat, value);
        self
    }

    /// Append a move
    pub fn with_move(mut self, name: impl Into<String>) -> Self {
        self.moves.push(name.into());
        self
    }

    /// Append several moves
    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves.extend(moves.into_iter().map(Into::into));
        self
    }

    /// Append a directive
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Value of the last `=Key=Value` pin for a field
    pub fn pinned(&self, field: DirectiveField) -> Option<&str> {
        self.directives
            .iter()
            .rev()
            .find(|d| d.kind == crate::DirectiveKind::Pin && d.field() == Some(field))
            .map(|d| d.value.as_str())
    }

    /// Whether any provenance field is pinned
    pub fn pins_provenance(&self) -> bool {
        self.directives.iter().any(|d| {
            d.kind == crate::DirectiveKind::Pin && d.field().is_some_and(|f| f.is_provenance())
        })
    }

    /// Origin version named by any directive kind (last one wins)
    pub fn origin_version(&self) -> OriginConstraint<GameVersion> {
        match self.last_value(DirectiveField::Version) {
            None => OriginConstraint::Open,
            Some(raw) => match GameVersion::parse(raw) {
                Some(v) if v != GameVersion::Any => OriginConstraint::Fixed(v),
                _ => OriginConstraint::Unsatisfiable,
            },
        }
    }

    /// Origin generation named by any directive kind (last one wins)
    pub fn origin_generation(&self) -> OriginConstraint<u8> {
        match self.last_value(DirectiveField::Generation) {
            None => OriginConstraint::Open,
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(g) if (1..=8).contains(&g) => OriginConstraint::Fixed(g),
                _ => OriginConstraint::Unsatisfiable,
            },
        }
    }

    /// Directives whose keys the synthesizer does not understand
    pub fn unrecognized_directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(|d| d.field().is_none())
    }

    /// Species with form suffix, e.g. `Meowstic-F`
    pub fn display_species(&self) -> String {
        match &self.form {
            Some(form) => format!("{}-{}", self.species, form),
            None => self.species.clone(),
        }
    }

    fn last_value(&self, field: DirectiveField) -> Option<&str> {
        self.directives
            .iter()
            .rev()
            .find(|d| d.field() == Some(field))
            .map(|d| d.value.as_str())
    }
}
