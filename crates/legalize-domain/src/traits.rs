//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::Record;
use std::sync::Arc;

/// Outcome of evaluating a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the record is legitimate
    pub accepted: bool,
    /// Human-readable diagnostic
    pub report: String,
}

impl Verdict {
    /// Accepted verdict
    pub fn accept(report: impl Into<String>) -> Self {
        Self {
            accepted: true,
            report: report.into(),
        }
    }

    /// Rejected verdict
    pub fn reject(report: impl Into<String>) -> Self {
        Self {
            accepted: false,
            report: report.into(),
        }
    }
}

/// Rule engine deciding whether a record is legitimate
///
/// Implemented by the validation layer (legalize-gatekeeper). Evaluation may
/// be expensive; callers must not hold locks across it.
pub trait ValidatorOracle {
    /// Evaluate a candidate record
    fn evaluate(&self, record: &Record) -> Verdict;
}

impl<T: ValidatorOracle + ?Sized> ValidatorOracle for &T {
    fn evaluate(&self, record: &Record) -> Verdict {
        (**self).evaluate(record)
    }
}

impl<T: ValidatorOracle + ?Sized> ValidatorOracle for Box<T> {
    fn evaluate(&self, record: &Record) -> Verdict {
        (**self).evaluate(record)
    }
}

impl<T: ValidatorOracle + ?Sized> ValidatorOracle for Arc<T> {
    fn evaluate(&self, record: &Record) -> Verdict {
        (**self).evaluate(record)
    }
}
