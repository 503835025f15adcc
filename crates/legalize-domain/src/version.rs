//! Game versions and version groups

use std::fmt;

/// Origin game version
///
/// Individual games carry their canonical numeric codes. Values from
/// [`GameVersion::RB`] upward are version *groups*: families of games that are
/// resolved through [`GameVersion::contains`] rather than by exact match.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GameVersion {
    /// No version (unset)
    Any = 0,

    /// Sapphire
    S = 1,
    /// Ruby
    R = 2,
    /// Emerald
    E = 3,
    /// FireRed
    FR = 4,
    /// LeafGreen
    LG = 5,
    /// HeartGold
    HG = 7,
    /// SoulSilver
    SS = 8,
    /// Diamond
    D = 10,
    /// Pearl
    P = 11,
    /// Platinum
    Pt = 12,
    /// Colosseum / XD
    CXD = 15,
    /// White
    W = 20,
    /// Black
    B = 21,
    /// White 2
    W2 = 22,
    /// Black 2
    B2 = 23,
    /// X
    X = 24,
    /// Y
    Y = 25,
    /// Alpha Sapphire
    AS = 26,
    /// Omega Ruby
    OR = 27,
    /// Sun
    SN = 30,
    /// Moon
    MN = 31,
    /// Ultra Sun
    US = 32,
    /// Ultra Moon
    UM = 33,
    /// GO
    GO = 34,
    /// Red (Virtual Console)
    RD = 35,
    /// Green (Virtual Console)
    GN = 36,
    /// Blue (Virtual Console)
    BU = 37,
    /// Yellow (Virtual Console)
    YW = 38,
    /// Gold (Virtual Console)
    GD = 39,
    /// Silver (Virtual Console)
    SI = 40,
    /// Crystal (Virtual Console)
    C = 41,
    /// Let's Go Pikachu
    GP = 42,
    /// Let's Go Eevee
    GE = 43,
    /// Sword
    SW = 44,
    /// Shield
    SH = 45,
    /// Legends: Arceus
    PLA = 47,
    /// Brilliant Diamond
    BD = 48,
    /// Shining Pearl
    SP = 49,

    /// Red / Green / Blue
    RB = 50,
    /// Red / Green / Blue / Yellow
    RBY = 51,
    /// Gold / Silver
    GS = 52,
    /// Gold / Silver / Crystal
    GSC = 53,
    /// Ruby / Sapphire
    RS = 54,
    /// Ruby / Sapphire / Emerald
    RSE = 55,
    /// FireRed / LeafGreen
    FRLG = 56,
    /// Diamond / Pearl
    DP = 57,
    /// Diamond / Pearl / Platinum
    DPPt = 58,
    /// HeartGold / SoulSilver
    HGSS = 59,
    /// Black / White
    BW = 60,
    /// Black 2 / White 2
    B2W2 = 61,
    /// X / Y
    XY = 62,
    /// Omega Ruby / Alpha Sapphire
    ORAS = 63,
    /// Sun / Moon
    SM = 64,
    /// Ultra Sun / Ultra Moon
    USUM = 65,
    /// Let's Go Pikachu / Eevee
    GG = 66,
    /// Sword / Shield
    SWSH = 67,
    /// Brilliant Diamond / Shining Pearl
    BDSP = 68,
    /// Every generation 1 game
    Gen1 = 69,
    /// Every generation 2 game
    Gen2 = 70,
    /// Every generation 3 game
    Gen3 = 71,
    /// Every generation 4 game
    Gen4 = 72,
    /// Every generation 5 game
    Gen5 = 73,
    /// Every generation 6 game
    Gen6 = 74,
    /// Every generation 7 game
    Gen7 = 75,
    /// Every generation 8 game
    Gen8 = 76,
}

use GameVersion::*;

impl GameVersion {
    /// First grouped value; everything at or above it resolves by family
    pub const GROUPED_THRESHOLD: GameVersion = RB;

    /// Every known version, in ascending id order
    pub const ALL: &'static [GameVersion] = &[
        Any, S, R, E, FR, LG, HG, SS, D, P, Pt, CXD, W, B, W2, B2, X, Y, AS, OR, SN, MN, US, UM,
        GO, RD, GN, BU, YW, GD, SI, C, GP, GE, SW, SH, PLA, BD, SP, RB, RBY, GS, GSC, RS, RSE,
        FRLG, DP, DPPt, HGSS, BW, B2W2, XY, ORAS, SM, USUM, GG, SWSH, BDSP, Gen1, Gen2, Gen3,
        Gen4, Gen5, Gen6, Gen7, Gen8,
    ];

    /// Numeric id of this version
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a version by its numeric id
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| i32::from(v.id()) == id)
    }

    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Any => "Any",
            S => "S",
            R => "R",
            E => "E",
            FR => "FR",
            LG => "LG",
            HG => "HG",
            SS => "SS",
            D => "D",
            P => "P",
            Pt => "Pt",
            CXD => "CXD",
            W => "W",
            B => "B",
            W2 => "W2",
            B2 => "B2",
            X => "X",
            Y => "Y",
            AS => "AS",
            OR => "OR",
            SN => "SN",
            MN => "MN",
            US => "US",
            UM => "UM",
            GO => "GO",
            RD => "RD",
            GN => "GN",
            BU => "BU",
            YW => "YW",
            GD => "GD",
            SI => "SI",
            C => "C",
            GP => "GP",
            GE => "GE",
            SW => "SW",
            SH => "SH",
            PLA => "PLA",
            BD => "BD",
            SP => "SP",
            RB => "RB",
            RBY => "RBY",
            GS => "GS",
            GSC => "GSC",
            RS => "RS",
            RSE => "RSE",
            FRLG => "FRLG",
            DP => "DP",
            DPPt => "DPPt",
            HGSS => "HGSS",
            BW => "BW",
            B2W2 => "B2W2",
            XY => "XY",
            ORAS => "ORAS",
            SM => "SM",
            USUM => "USUM",
            GG => "GG",
            SWSH => "SWSH",
            BDSP => "BDSP",
            Gen1 => "Gen1",
            Gen2 => "Gen2",
            Gen3 => "Gen3",
            Gen4 => "Gen4",
            Gen5 => "Gen5",
            Gen6 => "Gen6",
            Gen7 => "Gen7",
            Gen8 => "Gen8",
        }
    }

    /// Parse a version from its numeric id or short name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i32>() {
            return Self::from_id(id);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
    }

    /// Whether this value names a version group rather than a single game
    pub fn is_grouped(self) -> bool {
        self >= Self::GROUPED_THRESHOLD
    }

    /// Generation this version (or group) belongs to; 0 for [`GameVersion::Any`]
    pub fn generation(self) -> u8 {
        match self {
            Any => 0,
            RD | GN | BU | YW | RB | RBY | Gen1 => 1,
            GD | SI | C | GS | GSC | Gen2 => 2,
            S | R | E | FR | LG | CXD | RS | RSE | FRLG | Gen3 => 3,
            D | P | Pt | HG | SS | DP | DPPt | HGSS | Gen4 => 4,
            W | B | W2 | B2 | BW | B2W2 | Gen5 => 5,
            X | Y | AS | OR | XY | ORAS | Gen6 => 6,
            SN | MN | US | UM | GO | GP | GE | SM | USUM | GG | Gen7 => 7,
            SW | SH | PLA | BD | SP | SWSH | BDSP | Gen8 => 8,
        }
    }

    /// Direct members of a version group (empty for single games)
    pub fn members(self) -> &'static [GameVersion] {
        match self {
            RB => &[RD, GN, BU],
            RBY => &[RB, YW],
            GS => &[GD, SI],
            GSC => &[GS, C],
            RS => &[R, S],
            RSE => &[RS, E],
            FRLG => &[FR, LG],
            DP => &[D, P],
            DPPt => &[DP, Pt],
            HGSS => &[HG, SS],
            BW => &[B, W],
            B2W2 => &[B2, W2],
            XY => &[X, Y],
            ORAS => &[OR, AS],
            SM => &[SN, MN],
            USUM => &[US, UM],
            GG => &[GP, GE],
            SWSH => &[SW, SH],
            BDSP => &[BD, SP],
            Gen1 => &[RBY],
            Gen2 => &[GSC],
            Gen3 => &[RSE, FRLG, CXD],
            Gen4 => &[DPPt, HGSS],
            Gen5 => &[BW, B2W2],
            Gen6 => &[XY, ORAS],
            Gen7 => &[SM, USUM, GG, GO],
            Gen8 => &[SWSH, BDSP, PLA],
            _ => &[],
        }
    }

    /// Whether `other` belongs to this version's family
    ///
    /// Every version contains itself; groups contain their members
    /// transitively.
    pub fn contains(self, other: GameVersion) -> bool {
        self == other || self.members().iter().any(|m| m.contains(other))
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GameVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid game version: {}", s))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_version() -> impl Strategy<Value = GameVersion> {
        proptest::sample::select(GameVersion::ALL.to_vec())
    }

    proptest! {
        /// Property: every version contains itself
        #[test]
        fn test_contains_is_reflexive(v in any_version()) {
            prop_assert!(v.contains(v));
        }

        /// Property: a family only contains versions of its own generation
        #[test]
        fn test_contains_preserves_generation(a in any_version(), b in any_version()) {
            if a != GameVersion::Any && a.contains(b) {
                prop_assert_eq!(a.generation(), b.generation());
            }
        }

        /// Property: single games contain nothing but themselves
        #[test]
        fn test_single_games_are_leaves(a in any_version(), b in any_version()) {
            if !a.is_grouped() && a != b {
                prop_assert!(!a.contains(b));
            }
        }
    }
}
