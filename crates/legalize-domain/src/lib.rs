//! Legalize Domain Layer
//!
//! This crate contains the core domain model for Legalize. It has ZERO
//! external dependencies and defines the fundamental concepts, value objects,
//! reference data, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Specification**: a partial description of a desired entity plus override directives
//! - **Directive**: `=Key=Value` pins, `.Key=Value` hints, `~=Key=Value` restrictions
//! - **ProvenanceIdentity**: who a record claims to come from (name, IDs, language, version)
//! - **Record**: the concrete entity handed to the validator
//! - **GameVersion**: origin games and version groups
//! - **EncounterTemplate**: per-origin encounter defaults and constraints
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure domain logic and reference tables only
//! - Infrastructure (registry, validator, search) lives in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod directive;
pub mod encounter;
pub mod identity;
pub mod language;
pub mod record;
pub mod species;
pub mod specification;
pub mod stats;
pub mod traits;
pub mod version;

// Re-exports for convenience
pub use context::TargetContext;
pub use directive::{Directive, DirectiveField, DirectiveKind};
pub use encounter::{EncounterKind, EncounterTemplate, ShinyPolicy};
pub use identity::ProvenanceIdentity;
pub use language::LanguageId;
pub use record::Record;
pub use species::{GenderPolicy, SpeciesEntry};
pub use specification::{OriginConstraint, Specification};
pub use stats::{Gender, Nature, Stat, StatSpread};
pub use traits::{ValidatorOracle, Verdict};
pub use version::GameVersion;
