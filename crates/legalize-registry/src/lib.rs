//! Legalize Provenance Registry
//!
//! Stores known trainer identities, bucketed by origin version, and answers
//! "give me a plausible trainer for this version" with seeded random
//! selection.
//!
//! ## Components
//!
//! - [`ProvenanceRegistry`]: version-bucketed identity store
//! - [`RecentIdentityCache`]: the identity used by the last successful synthesis
//! - [`TrainerConfig`]: TOML trainer file used to seed a registry
//! - [`selection`]: pure random selection helpers
//!
//! ## Example
//!
//! ```
//! use legalize_domain::{GameVersion, LanguageId, ProvenanceIdentity};
//! use legalize_registry::ProvenanceRegistry;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let registry = ProvenanceRegistry::new();
//! registry.register(ProvenanceIdentity::new(
//!     GameVersion::SW,
//!     LanguageId::English,
//!     "Hop",
//!     11111,
//!     22222,
//! ));
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let found = registry.get_by_version(GameVersion::SWSH, None, &mut rng);
//! assert_eq!(found.unwrap().ot_name, "Hop");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod error;
pub mod registry;
pub mod selection;

pub use cache::RecentIdentityCache;
pub use config::{IdOrName, TrainerConfig, TrainerEntry};
pub use error::RegistryConfigError;
pub use registry::ProvenanceRegistry;
