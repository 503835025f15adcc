//! Concrete records produced by synthesis

use crate::{Gender, GameVersion, LanguageId, Nature, ProvenanceIdentity, StatSpread};

/// XOR of trainer IDs and both PID halves; low values mean shiny
pub fn shiny_xor(pid: u32, tid: u16, sid: u16) -> u16 {
    let high = (pid >> 16) as u16;
    let low = (pid & 0xFFFF) as u16;
    tid ^ sid ^ high ^ low
}

/// Exclusive upper bound of [`shiny_xor`] for a shiny record
pub fn shiny_threshold(generation: u8) -> u16 {
    if generation >= 7 {
        16
    } else {
        8
    }
}

/// A fully specified entity with an attached provenance identity
///
/// Records are created per synthesis attempt, handed to the validator, and
/// either returned to the caller or dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Species name
    pub species: String,
    /// Form suffix
    pub form: Option<String>,
    /// Nickname
    pub nickname: Option<String>,
    /// Gender
    pub gender: Gender,
    /// Ability
    pub ability: String,
    /// Held item
    pub held_item: Option<String>,
    /// Nature
    pub nature: Nature,
    /// Current level
    pub level: u8,
    /// Requested shininess
    pub shiny: bool,
    /// Record language
    pub language: LanguageId,
    /// Individual values
    pub ivs: StatSpread,
    /// Effort values
    pub evs: StatSpread,
    /// Move list
    pub moves: Vec<String>,
    /// Claimed origin version
    pub origin_version: GameVersion,
    /// Claimed origin generation
    pub generation: u8,
    /// Met location id
    pub met_location: u16,
    /// Met level
    pub met_level: u8,
    /// Personality value
    pub pid: u32,
    /// Original trainer
    pub trainer: ProvenanceIdentity,
}

impl Record {
    /// Shininess implied by the PID and the trainer's IDs
    pub fn is_shiny_by_pid(&self) -> bool {
        shiny_xor(self.pid, self.trainer.tid, self.trainer.sid) < shiny_threshold(self.generation)
    }

    /// Species with form suffix, e.g. `Meowstic-F`
    pub fn display_species(&self) -> String {
        match &self.form {
            Some(form) => format!("{}-{}", self.species, form),
            None => self.species.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shiny_xor() {
        // 0x1200 ^ 0x0034 ^ 0xABCD == 0xB9F9
        assert_eq!(shiny_xor(0xABCD_B9F9, 0x1200, 0x0034), 0);
        assert_eq!(shiny_xor(0xABCD_B9F8, 0x1200, 0x0034), 1);
        assert_eq!(shiny_xor(0, 0xFFFF, 0), 0xFFFF);
    }

    #[test]
    fn test_shiny_threshold() {
        assert_eq!(shiny_threshold(6), 8);
        assert_eq!(shiny_threshold(7), 16);
        assert_eq!(shiny_threshold(8), 16);
    }
}
