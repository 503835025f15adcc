//! Synthesis error types

use thiserror::Error;

/// Why a specification could not be turned into an accepted record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisFailure {
    /// Every candidate origin was tried and rejected (or there were none)
    #[error("No valid origin after {attempts} attempt(s): {diagnostic}")]
    NoValidOrigin {
        /// Oracle calls made
        attempts: usize,
        /// Report of the last rejection
        diagnostic: String,
    },

    /// The attempt or time budget ran out before the search finished
    #[error("Search budget exhausted after {attempts} attempt(s): {diagnostic}")]
    BudgetExhausted {
        /// Oracle calls made
        attempts: usize,
        /// Report of the last rejection
        diagnostic: String,
    },

    /// Species (or form) has no reference data
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// A pinned directive value cannot be interpreted
    #[error("Invalid directive {key}={value}: {reason}")]
    InvalidDirective {
        /// Directive key
        key: String,
        /// Directive value
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// Synthesizer configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A batch worker task failed to complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
}
