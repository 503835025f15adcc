//! Provenance registry
//!
//! Identities are bucketed by the version they were played on. Lookups for a
//! single game use that game's bucket only; lookups for a version group or a
//! generation pick uniformly among the matching buckets first and then
//! uniformly within the chosen bucket.

use crate::cache::RecentIdentityCache;
use crate::config::TrainerConfig;
use crate::error::RegistryConfigError;
use crate::selection::{choose, choose_two_level};
use legalize_domain::{GameVersion, LanguageId, ProvenanceIdentity, Record};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

type Buckets = BTreeMap<GameVersion, Vec<ProvenanceIdentity>>;

/// Identities keyed by origin version
///
/// Buckets are kept in version order so that, for a fixed seed, grouped
/// lookups are reproducible. Each bucket holds no two structurally equal
/// identities.
#[derive(Debug, Default)]
pub struct ProvenanceRegistry {
    buckets: RwLock<Buckets>,
}

impl ProvenanceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from a trainer file
    pub fn from_config(config: &TrainerConfig) -> Result<Self, RegistryConfigError> {
        let registry = Self::new();
        let identities = config.identities()?;
        let total = identities.len();
        let added = identities
            .into_iter()
            .filter(|identity| registry.register(identity.clone()))
            .count();
        debug!(total, added, "Seeded provenance registry");
        Ok(registry)
    }

    /// Random identity registered for `version`
    ///
    /// For a version group, every bucket the group contains is a candidate
    /// and `language` (when given) filters identities within them. For a
    /// single game only that game's bucket is consulted and `language` is
    /// ignored. [`GameVersion::Any`] never matches.
    pub fn get_by_version<R>(
        &self,
        version: GameVersion,
        language: Option<LanguageId>,
        rng: &mut R,
    ) -> Option<ProvenanceIdentity>
    where
        R: Rng + ?Sized,
    {
        if version == GameVersion::Any {
            return None;
        }

        let buckets = self.read();
        let picked = if version.is_grouped() {
            let groups = matching_groups(&buckets, |key| version.contains(key), language);
            choose_two_level(&groups, rng).map(|identity| (*identity).clone())
        } else {
            buckets
                .get(&version)
                .and_then(|bucket| choose(bucket, rng))
                .cloned()
        };

        trace!(
            version = %version,
            found = picked.is_some(),
            "Registry lookup by version"
        );
        picked
    }

    /// Random identity from any bucket of `generation`
    ///
    /// Same two-level selection and language filtering as a grouped version
    /// lookup.
    pub fn get_by_generation<R>(
        &self,
        generation: u8,
        language: Option<LanguageId>,
        rng: &mut R,
    ) -> Option<ProvenanceIdentity>
    where
        R: Rng + ?Sized,
    {
        if generation == 0 {
            return None;
        }

        let buckets = self.read();
        let groups = matching_groups(&buckets, |key| key.generation() == generation, language);
        let picked = choose_two_level(&groups, rng).map(|identity| (*identity).clone());

        trace!(generation, found = picked.is_some(), "Registry lookup by generation");
        picked
    }

    /// Add an identity
    ///
    /// The identity is filed under its own version, or its context version
    /// when its own is [`GameVersion::Any`]. Identities with neither are
    /// ignored. Returns `true` if the registry changed.
    pub fn register(&self, identity: ProvenanceIdentity) -> bool {
        let Some(key) = identity.bucket_version() else {
            debug!(ot_name = %identity.ot_name, "Ignoring identity without a version");
            return false;
        };

        let mut buckets = self.write();
        let bucket = buckets.entry(key).or_default();
        if bucket.contains(&identity) {
            trace!(version = %key, ot_name = %identity.ot_name, "Identity already registered");
            return false;
        }

        debug!(
            version = %key,
            ot_name = %identity.ot_name,
            tid = identity.tid,
            sid = identity.sid,
            "Registered identity"
        );
        bucket.push(identity);
        true
    }

    /// Register the provenance of a record
    ///
    /// Only a copy of the provenance fields is stored; later changes to the
    /// record are not visible through the registry.
    pub fn register_record(&self, record: &Record) -> bool {
        self.register(ProvenanceIdentity::from_record(record))
    }

    /// Register an identity and mark it as the most recently used one
    pub fn register_recent(&self, identity: ProvenanceIdentity, cache: &RecentIdentityCache) -> bool {
        cache.set(identity.clone());
        self.register(identity)
    }

    /// Remove every identity
    pub fn clear(&self) {
        self.write().clear();
        debug!("Cleared provenance registry");
    }

    /// Total number of identities across all buckets
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    /// Whether no identities are registered
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of non-empty buckets
    pub fn bucket_count(&self) -> usize {
        self.read().len()
    }

    /// Versions that have at least one identity, in version order
    pub fn versions(&self) -> Vec<GameVersion> {
        self.read().keys().copied().collect()
    }

    /// Identities filed exactly under `version`, in registration order
    pub fn identities(&self, version: GameVersion) -> Vec<ProvenanceIdentity> {
        self.read().get(&version).cloned().unwrap_or_default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Buckets> {
        self.buckets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Buckets> {
        self.buckets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matching_groups<'a>(
    buckets: &'a Buckets,
    key_matches: impl Fn(GameVersion) -> bool,
    language: Option<LanguageId>,
) -> Vec<Vec<&'a ProvenanceIdentity>> {
    buckets
        .iter()
        .filter(|(key, _)| key_matches(**key))
        .map(|(_, bucket)| {
            bucket
                .iter()
                .filter(|identity| language.is_none_or(|l| identity.language == l))
                .collect()
        })
        .collect()
}
