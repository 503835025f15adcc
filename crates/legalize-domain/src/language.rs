//! Game languages

use std::fmt;

/// Language a record or trainer was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LanguageId {
    /// Japanese
    Japanese = 1,
    /// English
    English = 2,
    /// French
    French = 3,
    /// Italian
    Italian = 4,
    /// German
    German = 5,
    /// Spanish
    Spanish = 7,
    /// Korean
    Korean = 8,
    /// Simplified Chinese
    ChineseS = 9,
    /// Traditional Chinese
    ChineseT = 10,
}

impl LanguageId {
    /// Every language, in id order
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::Japanese,
        LanguageId::English,
        LanguageId::French,
        LanguageId::Italian,
        LanguageId::German,
        LanguageId::Spanish,
        LanguageId::Korean,
        LanguageId::ChineseS,
        LanguageId::ChineseT,
    ];

    /// Numeric id
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a language by numeric id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.id() == id)
    }

    /// Get the language name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Japanese => "Japanese",
            LanguageId::English => "English",
            LanguageId::French => "French",
            LanguageId::Italian => "Italian",
            LanguageId::German => "German",
            LanguageId::Spanish => "Spanish",
            LanguageId::Korean => "Korean",
            LanguageId::ChineseS => "ChineseS",
            LanguageId::ChineseT => "ChineseT",
        }
    }

    /// Parse a language from its name, common abbreviation, or numeric id
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id);
        }
        match s.to_lowercase().as_str() {
            "japanese" | "jpn" | "ja" => Some(LanguageId::Japanese),
            "english" | "eng" | "en" => Some(LanguageId::English),
            "french" | "fre" | "fr" => Some(LanguageId::French),
            "italian" | "ita" | "it" => Some(LanguageId::Italian),
            "german" | "ger" | "de" => Some(LanguageId::German),
            "spanish" | "spa" | "es" => Some(LanguageId::Spanish),
            "korean" | "kor" | "ko" => Some(LanguageId::Korean),
            "chineses" | "chinese (simplified)" | "zh-hans" => Some(LanguageId::ChineseS),
            "chineset" | "chinese (traditional)" | "zh-hant" => Some(LanguageId::ChineseT),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid language: {}", s))
    }
}
