//! Draft records for a single attempt

use crate::{SynthesisFailure, SynthesizerConfig};
use legalize_domain::record::{shiny_threshold, shiny_xor};
use legalize_domain::{
    DirectiveField, EncounterTemplate, Gender, LanguageId, Nature, ProvenanceIdentity, Record,
    SpeciesEntry, Specification, TargetContext,
};
use rand::Rng;

/// Pinned directive values, parsed once per synthesis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pins {
    /// `=OT_Name=`
    pub ot_name: Option<String>,
    /// `=TID=`
    pub tid: Option<u16>,
    /// `=SID=`
    pub sid: Option<u16>,
    /// `=OT_Gender=`
    pub ot_gender: Option<Gender>,
    /// `=Met_Location=`
    pub met_location: Option<u16>,
    /// `=Met_Level=`
    pub met_level: Option<u8>,
}

impl Pins {
    /// Read the pins of a specification
    ///
    /// Pins are never relaxed, so a value that does not parse fails the whole
    /// synthesis instead of being ignored.
    pub fn from_spec(spec: &Specification) -> Result<Self, SynthesisFailure> {
        Ok(Self {
            ot_name: spec.pinned(DirectiveField::OtName).map(str::to_string),
            tid: parse_pin(spec, DirectiveField::Tid, |v| v.parse::<u16>().ok())?,
            sid: parse_pin(spec, DirectiveField::Sid, |v| v.parse::<u16>().ok())?,
            ot_gender: parse_pin(spec, DirectiveField::OtGender, |v| {
                Gender::parse(v).filter(|g| *g != Gender::Genderless)
            })?,
            met_location: parse_pin(spec, DirectiveField::MetLocation, |v| {
                v.parse::<u16>().ok()
            })?,
            met_level: parse_pin(spec, DirectiveField::MetLevel, |v| {
                v.parse::<u8>().ok().filter(|l| (1..=100).contains(l))
            })?,
        })
    }

    /// Identity built from the pins on top of the default identity
    pub fn identity(&self, base: ProvenanceIdentity) -> ProvenanceIdentity {
        let mut identity = base;
        if let Some(name) = &self.ot_name {
            identity.ot_name = name.clone();
        }
        if let Some(tid) = self.tid {
            identity.tid = tid;
        }
        if let Some(sid) = self.sid {
            identity.sid = sid;
        }
        if let Some(gender) = self.ot_gender {
            identity.ot_gender = gender;
        }
        identity
    }
}

fn parse_pin<T>(
    spec: &Specification,
    field: DirectiveField,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, SynthesisFailure> {
    match spec.pinned(field) {
        None => Ok(None),
        Some(raw) => parse(raw.trim()).map(Some).ok_or_else(|| SynthesisFailure::InvalidDirective {
            key: field.as_str().to_string(),
            value: raw.to_string(),
            reason: "value cannot be interpreted".to_string(),
        }),
    }
}

/// Everything fixed for one attempt besides the random source
pub struct Draft<'a> {
    /// Requested entity
    pub spec: &'a Specification,
    /// Destination
    pub ctx: &'a TargetContext,
    /// Species reference data
    pub species: &'static SpeciesEntry,
    /// Encounter being tried
    pub template: &'static EncounterTemplate,
    /// Parsed pins
    pub pins: &'a Pins,
    /// Synthesizer settings
    pub config: &'a SynthesizerConfig,
}

impl Draft<'_> {
    /// Build the candidate record for `identity`
    pub fn build<R>(&self, identity: ProvenanceIdentity, rng: &mut R) -> Record
    where
        R: Rng + ?Sized,
    {
        let spec = self.spec;
        let template = self.template;
        let generation = match self.ctx.generation() {
            0 => template.version.generation(),
            g => g,
        };

        let language = template
            .fixed_language
            .or(spec.language)
            .unwrap_or(identity.language);

        let nature = spec
            .nature
            .unwrap_or_else(|| Nature::ALL[rng.gen_range(0..Nature::ALL.len())]);

        let pid = generate_pid(identity.tid, identity.sid, spec.shiny, generation, rng);

        Record {
            species: self.species.name.to_string(),
            form: self.species.form.map(str::to_string),
            nickname: spec.nickname.clone(),
            gender: spec
                .gender
                .unwrap_or_else(|| self.species.gender.default_gender()),
            ability: spec
                .ability
                .clone()
                .or_else(|| self.species.abilities.first().map(|a| a.to_string()))
                .unwrap_or_default(),
            held_item: spec.held_item.clone(),
            nature,
            level: spec.level.unwrap_or(self.config.default_level),
            shiny: spec.shiny,
            language,
            ivs: spec.ivs,
            evs: spec.evs,
            moves: spec.moves.clone(),
            origin_version: template.version,
            generation,
            met_location: self.pins.met_location.unwrap_or(template.met_location),
            met_level: self.pins.met_level.unwrap_or(template.met_level),
            pid,
            trainer: identity,
        }
    }
}

/// Language to look identities up with, and to fall back to
pub fn requested_language(spec: &Specification, ctx: &TargetContext) -> Option<LanguageId> {
    spec.language.or_else(|| ctx.language())
}

/// Random PID whose shininess against `tid`/`sid` is exactly `shiny`
pub fn generate_pid<R>(tid: u16, sid: u16, shiny: bool, generation: u8, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    let threshold = shiny_threshold(generation);
    if shiny {
        let high: u16 = rng.gen();
        let low = tid ^ sid ^ high ^ rng.gen_range(0..threshold);
        return (u32::from(high) << 16) | u32::from(low);
    }

    loop {
        let pid: u32 = rng.gen();
        if shiny_xor(pid, tid, sid) >= threshold {
            return pid;
        }
    }
}
