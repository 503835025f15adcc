//! Legalize Gatekeeper
//!
//! Reference validator oracle: decides whether a concrete record is
//! consistent with its claimed origin.
//!
//! The Gatekeeper provides:
//! - Encounter matching (origin version, met location, met level)
//! - Shiny consistency and encounter shiny locks
//! - IV/EV bounds and guaranteed perfect IVs
//! - Move, ability, and gender checks
//! - OT name and in-game trade provenance checks
//!
//! # Examples
//!
//! ```no_run
//! use legalize_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let config = ValidationConfig::default();
//! let gatekeeper = Gatekeeper::new(config);
//!
//! // Validate a record before handing it out
//! // let result = gatekeeper.validate(&record);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
