//! Natures, genders, and stat spreads

use std::fmt;

/// Highest individual value a stat can hold
pub const MAX_IV: u8 = 31;

/// Highest effort value a single stat can hold
pub const MAX_EV: u8 = 252;

/// Highest effort value total across all stats
pub const MAX_EV_TOTAL: u16 = 510;

/// The six battle stats, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Hit points
    Hp,
    /// Attack
    Atk,
    /// Defense
    Def,
    /// Special Attack
    SpA,
    /// Special Defense
    SpD,
    /// Speed
    Spe,
}

impl Stat {
    /// All stats in storage order
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::SpA, Stat::SpD, Stat::Spe];

    /// Storage index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label as written in set text ("HP", "Atk", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::SpA => "SpA",
            Stat::SpD => "SpD",
            Stat::Spe => "Spe",
        }
    }

    /// Parse a stat label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "spatk" | "special attack" => Some(Stat::SpA),
            "spd" | "spdef" | "special defense" => Some(Stat::SpD),
            "spe" | "speed" => Some(Stat::Spe),
            _ => None,
        }
    }
}

/// A six-value stat spread (IVs or EVs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatSpread(pub [u8; 6]);

impl StatSpread {
    /// All stats at the maximum IV
    pub fn perfect_ivs() -> Self {
        Self([MAX_IV; 6])
    }

    /// All stats at zero
    pub fn zero() -> Self {
        Self([0; 6])
    }

    /// Value for a stat
    pub fn get(&self, stat: Stat) -> u8 {
        self.0[stat.index()]
    }

    /// Set the value for a stat
    pub fn set(&mut self, stat: Stat, value: u8) {
        self.0[stat.index()] = value;
    }

    /// Builder-style variant of [`StatSpread::set`]
    pub fn with(mut self, stat: Stat, value: u8) -> Self {
        self.set(stat, value);
        self
    }

    /// Sum of all values
    pub fn total(&self) -> u16 {
        self.0.iter().map(|v| u16::from(*v)).sum()
    }

    /// Largest single value
    pub fn max(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Number of stats holding exactly `value`
    pub fn count_equal(&self, value: u8) -> usize {
        self.0.iter().filter(|v| **v == value).count()
    }
}

impl fmt::Display for StatSpread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::ALL
            .iter()
            .map(|s| format!("{} {}", self.get(*s), s.as_str()))
            .collect();
        write!(f, "{}", parts.join(" / "))
    }
}

/// Gender of a record or trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// No gender
    Genderless,
}

impl Gender {
    /// Get the gender as a short string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Genderless => "-",
        }
    }

    /// Parse a gender marker ("M", "F", "Male", "Female", "-")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "0" => Some(Gender::Male),
            "f" | "female" | "1" => Some(Gender::Female),
            "-" | "n" | "genderless" | "2" => Some(Gender::Genderless),
            _ => None,
        }
    }
}

/// Nature, in canonical index order
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// All natures in index order
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// Canonical index (PID modulo 25 in early generations)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Nature name
    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }

    /// Parse a nature name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
