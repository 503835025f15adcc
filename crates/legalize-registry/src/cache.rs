//! Most-recently-used identity

use legalize_domain::ProvenanceIdentity;
use std::sync::{PoisonError, RwLock};

/// Single-slot cache of the last identity used by a successful synthesis
///
/// Read as a fallback when the registry has nothing for an origin; never
/// consulted ahead of the registry.
#[derive(Debug, Default)]
pub struct RecentIdentityCache {
    slot: RwLock<Option<ProvenanceIdentity>>,
}

impl RecentIdentityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identity, if any
    pub fn get(&self) -> Option<ProvenanceIdentity> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the slot
    pub fn set(&self, identity: ProvenanceIdentity) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(identity);
    }

    /// Empty the slot
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
