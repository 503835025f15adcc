//! Legalize Synthesizer
//!
//! Searches for a concrete record that satisfies a partial specification and
//! that the validator oracle accepts.
//!
//! # Architecture
//!
//! ```text
//! Specification + TargetContext
//!     ↓
//! candidate_origins (pure ordering)
//!     ↓
//! for each origin / encounter:
//!     identity: pins → registry → recent cache → default
//!     draft record (PID matches requested shininess)
//!     oracle.evaluate
//!     ↓
//! first accepted record (cache updated) or SynthesisFailure
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use legalize_domain::{GameVersion, Specification, TargetContext};
//! use legalize_gatekeeper::Gatekeeper;
//! use legalize_registry::{ProvenanceRegistry, RecentIdentityCache};
//! use legalize_synthesizer::CandidateSynthesizer;
//!
//! let synthesizer = CandidateSynthesizer::new(
//!     Arc::new(ProvenanceRegistry::new()),
//!     Arc::new(RecentIdentityCache::new()),
//!     Gatekeeper::default_config(),
//! );
//! let spec = Specification::new("Darkrai")
//!     .with_ability("Bad Dreams")
//!     .with_moves(["Hypnosis", "Dark Pulse"])
//!     .shiny(true);
//! let record = synthesizer
//!     .synthesize(&spec, &TargetContext::new(GameVersion::US))
//!     .unwrap();
//! assert!(record.shiny);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod draft;
pub mod error;
pub mod origins;
pub mod synthesizer;

pub use batch::{synthesize_batch, synthesize_batch_seeded};
pub use config::SynthesizerConfig;
pub use error::SynthesisFailure;
pub use origins::candidate_origins;
pub use synthesizer::CandidateSynthesizer;
