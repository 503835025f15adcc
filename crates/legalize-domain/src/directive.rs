//! Override directives attached to a specification
//!
//! Directives are single lines with a prefix that selects their meaning:
//!
//! | Prefix | Kind | Example |
//! |---|---|---|
//! | `=` | [`DirectiveKind::Pin`] | `=OT_Name=Meister` |
//! | `.` | [`DirectiveKind::Hint`] | `.Version=48` |
//! | `~=` | [`DirectiveKind::Restrict`] | `~=Generation=8` |

use std::fmt;

/// How a directive constrains synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Field must be honored exactly
    Pin,
    /// Preferred origin value
    Hint,
    /// Restrict the search space (generation)
    Restrict,
}

impl DirectiveKind {
    /// Line prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            DirectiveKind::Pin => "=",
            DirectiveKind::Hint => ".",
            DirectiveKind::Restrict => "~=",
        }
    }
}

/// Directive keys the synthesizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveField {
    /// Original trainer name
    OtName,
    /// Trainer ID
    Tid,
    /// Secret ID
    Sid,
    /// Original trainer gender
    OtGender,
    /// Met location id
    MetLocation,
    /// Met level
    MetLevel,
    /// Origin version
    Version,
    /// Origin generation
    Generation,
}

impl DirectiveField {
    /// Canonical key spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveField::OtName => "OT_Name",
            DirectiveField::Tid => "TID",
            DirectiveField::Sid => "SID",
            DirectiveField::OtGender => "OT_Gender",
            DirectiveField::MetLocation => "Met_Location",
            DirectiveField::MetLevel => "Met_Level",
            DirectiveField::Version => "Version",
            DirectiveField::Generation => "Generation",
        }
    }

    /// Parse a key (case-insensitive); unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "ot_name" | "otname" => Some(DirectiveField::OtName),
            "tid" | "trainerid" => Some(DirectiveField::Tid),
            "sid" | "secretid" => Some(DirectiveField::Sid),
            "ot_gender" | "otgender" => Some(DirectiveField::OtGender),
            "met_location" | "metlocation" => Some(DirectiveField::MetLocation),
            "met_level" | "metlevel" => Some(DirectiveField::MetLevel),
            "version" => Some(DirectiveField::Version),
            "generation" => Some(DirectiveField::Generation),
            _ => None,
        }
    }

    /// Whether this field belongs to the provenance identity
    pub fn is_provenance(&self) -> bool {
        matches!(
            self,
            DirectiveField::OtName
                | DirectiveField::Tid
                | DirectiveField::Sid
                | DirectiveField::OtGender
        )
    }
}

/// A single override directive
///
/// Unknown keys are kept verbatim; [`Directive::field`] returns `None` for them
/// and the synthesizer ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    /// Directive kind
    pub kind: DirectiveKind,
    /// Key as written
    pub key: String,
    /// Value as written (trimmed)
    pub value: String,
}

impl Directive {
    /// Create a directive
    pub fn new(kind: DirectiveKind, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: value.into(),
        }
    }

    /// `=Key=Value`
    pub fn pin(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(DirectiveKind::Pin, key, value)
    }

    /// `.Key=Value`
    pub fn hint(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(DirectiveKind::Hint, key, value)
    }

    /// `~=Key=Value`
    pub fn restrict(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(DirectiveKind::Restrict, key, value)
    }

    /// Parse a directive line
    ///
    /// Returns `None` for ordinary descriptive lines and for malformed
    /// directives (missing `=` or empty key).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (kind, rest) = if let Some(rest) = line.strip_prefix("~=") {
            (DirectiveKind::Restrict, rest)
        } else if let Some(rest) = line.strip_prefix('=') {
            (DirectiveKind::Pin, rest)
        } else if let Some(rest) = line.strip_prefix('.') {
            (DirectiveKind::Hint, rest)
        } else {
            return None;
        };

        let (key, value) = rest.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(kind, key, value.trim()))
    }

    /// Recognized field, if the key is known
    pub fn field(&self) -> Option<DirectiveField> {
        DirectiveField::parse(&self.key)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}={}", self.kind.prefix(), self.key, self.value)
    }
}
