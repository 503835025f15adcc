//! Core synthesis search

use crate::draft::{requested_language, Draft, Pins};
use crate::origins::candidate_origins;
use crate::{SynthesisFailure, SynthesizerConfig};
use legalize_domain::{
    EncounterTemplate, GameVersion, LanguageId, ProvenanceIdentity, Record, SpeciesEntry,
    Specification, TargetContext, ValidatorOracle,
};
use legalize_registry::{ProvenanceRegistry, RecentIdentityCache};
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Turns specifications into records the oracle accepts
///
/// The registry and cache are shared (`Arc`) so several synthesizers, or a
/// batch of requests on one synthesizer, see the same identities. Neither is
/// locked while the oracle runs.
pub struct CandidateSynthesizer<O> {
    registry: Arc<ProvenanceRegistry>,
    cache: Arc<RecentIdentityCache>,
    oracle: O,
    config: SynthesizerConfig,
}

impl<O: ValidatorOracle> CandidateSynthesizer<O> {
    /// Create a synthesizer with the default configuration
    pub fn new(registry: Arc<ProvenanceRegistry>, cache: Arc<RecentIdentityCache>, oracle: O) -> Self {
        Self {
            registry,
            cache,
            oracle,
            config: SynthesizerConfig::default(),
        }
    }

    /// Create a synthesizer with a custom configuration
    pub fn with_config(
        registry: Arc<ProvenanceRegistry>,
        cache: Arc<RecentIdentityCache>,
        oracle: O,
        config: SynthesizerConfig,
    ) -> Result<Self, SynthesisFailure> {
        config.validate().map_err(SynthesisFailure::InvalidConfig)?;
        Ok(Self {
            registry,
            cache,
            oracle,
            config,
        })
    }

    /// Shared identity registry
    pub fn registry(&self) -> &Arc<ProvenanceRegistry> {
        &self.registry
    }

    /// Shared recent-identity cache
    pub fn cache(&self) -> &Arc<RecentIdentityCache> {
        &self.cache
    }

    /// Validator used to accept candidates
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Active configuration
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Synthesize using the thread-local random source
    pub fn synthesize(
        &self,
        spec: &Specification,
        ctx: &TargetContext,
    ) -> Result<Record, SynthesisFailure> {
        self.synthesize_with_rng(spec, ctx, &mut rand::thread_rng())
    }

    /// Synthesize with an explicit random source
    ///
    /// Tries each candidate origin in order and, within an origin, each
    /// encounter (restricted to a pinned met location if there is one). The
    /// first record the oracle accepts is returned and its identity becomes
    /// the recent identity. Pinned fields are the same in every attempt.
    pub fn synthesize_with_rng<R>(
        &self,
        spec: &Specification,
        ctx: &TargetContext,
        rng: &mut R,
    ) -> Result<Record, SynthesisFailure>
    where
        R: Rng + ?Sized,
    {
        let species = SpeciesEntry::lookup(&spec.species, spec.form.as_deref())
            .ok_or_else(|| SynthesisFailure::UnknownSpecies(spec.display_species()))?;

        for directive in spec.unrecognized_directives() {
            warn!(directive = %directive, "Ignoring unrecognized directive");
        }

        let pins = Pins::from_spec(spec)?;
        let pinned_identity = spec.pins_provenance();
        let language = requested_language(spec, ctx);
        let origins = candidate_origins(spec, ctx);
        debug!(
            species = %spec.display_species(),
            context = %ctx.version,
            candidates = origins.len(),
            "Starting synthesis"
        );

        let started = Instant::now();
        let deadline = self.config.time_budget();
        let mut attempts = 0usize;
        let mut diagnostic = String::from("no encounter matches the requested origin");

        for origin in origins {
            let templates = EncounterTemplate::for_origin(&spec.species, spec.form.as_deref(), origin)
                .filter(|t| pins.met_location.is_none_or(|loc| t.met_location == loc));

            for template in templates {
                let out_of_time = deadline.is_some_and(|budget| started.elapsed() >= budget);
                if attempts >= self.config.max_attempts || out_of_time {
                    warn!(attempts, out_of_time, "Synthesis budget exhausted");
                    return Err(SynthesisFailure::BudgetExhausted {
                        attempts,
                        diagnostic,
                    });
                }
                attempts += 1;

                let identity = self.resolve_identity(&pins, pinned_identity, origin, language, rng);
                let draft = Draft {
                    spec,
                    ctx,
                    species,
                    template,
                    pins: &pins,
                    config: &self.config,
                };
                let record = draft.build(identity, rng);

                let verdict = self.oracle.evaluate(&record);
                if verdict.accepted {
                    self.cache.set(record.trainer.clone());
                    info!(
                        species = %record.display_species(),
                        origin = %origin,
                        ot_name = %record.trainer.ot_name,
                        attempts,
                        "Synthesized record"
                    );
                    return Ok(record);
                }

                debug!(
                    attempt = attempts,
                    origin = %origin,
                    kind = template.kind.as_str(),
                    report = %verdict.report,
                    "Candidate rejected"
                );
                diagnostic = format!("{} ({}): {}", origin, template.kind.as_str(), verdict.report);
            }
        }

        info!(
            species = %spec.display_species(),
            attempts,
            "No valid origin found"
        );
        Err(SynthesisFailure::NoValidOrigin {
            attempts,
            diagnostic,
        })
    }

    /// Identity for one attempt
    ///
    /// Pinned provenance is used verbatim on the default identity. Otherwise
    /// the registry is asked first, then the recent cache, then the default.
    fn resolve_identity<R>(
        &self,
        pins: &Pins,
        pinned: bool,
        origin: GameVersion,
        language: Option<LanguageId>,
        rng: &mut R,
    ) -> ProvenanceIdentity
    where
        R: Rng + ?Sized,
    {
        let fallback =
            || ProvenanceIdentity::fallback(origin, language.unwrap_or(LanguageId::English));

        if pinned {
            return pins.identity(fallback());
        }

        if let Some(identity) = self.registry.get_by_version(origin, language, rng) {
            debug!(origin = %origin, ot_name = %identity.ot_name, "Registry hit");
            return identity;
        }

        if let Some(identity) = self.cache.get() {
            debug!(origin = %origin, ot_name = %identity.ot_name, "Using recent identity");
            return identity;
        }

        debug!(origin = %origin, "Using default identity");
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalize_domain::{Directive, Verdict};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Oracle that counts calls and accepts only one origin
    struct OnlyOrigin {
        accept: GameVersion,
        calls: AtomicUsize,
    }

    impl ValidatorOracle for OnlyOrigin {
        fn evaluate(&self, record: &Record) -> Verdict {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if record.origin_version == self.accept {
                Verdict::accept("ok")
            } else {
                Verdict::reject(format!("wrong origin {}", record.origin_version))
            }
        }
    }

    fn synthesizer(accept: GameVersion) -> CandidateSynthesizer<OnlyOrigin> {
        CandidateSynthesizer::new(
            Arc::new(ProvenanceRegistry::new()),
            Arc::new(RecentIdentityCache::new()),
            OnlyOrigin {
                accept,
                calls: AtomicUsize::new(0),
            },
        )
    }

    #[test]
    fn test_backtracks_to_accepted_origin() {
        let synth = synthesizer(GameVersion::B);
        let spec = Specification::new("Darkrai");
        let ctx = TargetContext::new(GameVersion::US);

        let record = synth
            .synthesize_with_rng(&spec, &ctx, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(record.origin_version, GameVersion::B);
        // US, UM, W rejected first
        assert_eq!(synth.oracle().calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_unknown_species() {
        let synth = synthesizer(GameVersion::US);
        let result = synth.synthesize(&Specification::new("Missingno"), &TargetContext::new(GameVersion::US));
        assert_eq!(result, Err(SynthesisFailure::UnknownSpecies("Missingno".to_string())));
    }

    #[test]
    fn test_no_valid_origin_reports_last_rejection() {
        let synth = synthesizer(GameVersion::SW);
        let spec = Specification::new("Genesect");
        let result = synth.synthesize(&spec, &TargetContext::new(GameVersion::B2));

        match result {
            Err(SynthesisFailure::NoValidOrigin {
                attempts,
                diagnostic,
            }) => {
                assert_eq!(attempts, 2);
                assert!(diagnostic.contains("W2"));
            }
            other => panic!("expected NoValidOrigin, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_search_space() {
        let synth = synthesizer(GameVersion::BD);
        let spec = Specification::new("Magikarp")
            .with_directive(Directive::hint("Version", "BD"))
            .with_directive(Directive::restrict("Generation", "7"));

        let result = synth.synthesize(&spec, &TargetContext::new(GameVersion::BD));
        assert!(matches!(
            result,
            Err(SynthesisFailure::NoValidOrigin { attempts: 0, .. })
        ));
        assert_eq!(synth.oracle().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_max_attempts_bounds_oracle_calls() {
        let config = SynthesizerConfig {
            max_attempts: 3,
            ..SynthesizerConfig::default()
        };
        let synth = CandidateSynthesizer::with_config(
            Arc::new(ProvenanceRegistry::new()),
            Arc::new(RecentIdentityCache::new()),
            OnlyOrigin {
                accept: GameVersion::Any,
                calls: AtomicUsize::new(0),
            },
            config,
        )
        .unwrap();

        let result = synth.synthesize(&Specification::new("Darkrai"), &TargetContext::new(GameVersion::BD));
        assert!(matches!(
            result,
            Err(SynthesisFailure::BudgetExhausted { attempts: 3, .. })
        ));
        assert_eq!(synth.oracle().calls.load(Ordering::SeqCst), 3);
    }

    /// Oracle that rejects everything after a fixed delay
    struct SlowOracle {
        delay: Duration,
        calls: AtomicUsize,
    }

    impl ValidatorOracle for SlowOracle {
        fn evaluate(&self, _record: &Record) -> Verdict {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            Verdict::reject("slow")
        }
    }

    #[test]
    fn test_time_budget_stops_search() {
        let config = SynthesizerConfig {
            time_budget_ms: 50,
            ..SynthesizerConfig::default()
        };
        let synth = CandidateSynthesizer::with_config(
            Arc::new(ProvenanceRegistry::new()),
            Arc::new(RecentIdentityCache::new()),
            SlowOracle {
                delay: Duration::from_millis(30),
                calls: AtomicUsize::new(0),
            },
            config,
        )
        .unwrap();

        // Nine encounters would be tried without a deadline
        let result = synth.synthesize(&Specification::new("Darkrai"), &TargetContext::new(GameVersion::BD));
        match result {
            Err(SynthesisFailure::BudgetExhausted {
                attempts,
                diagnostic,
            }) => {
                assert!((1..=2).contains(&attempts), "attempts = {}", attempts);
                assert_eq!(synth.oracle().calls.load(Ordering::SeqCst), attempts);
                assert!(diagnostic.ends_with("slow"));
            }
            other => panic!("expected BudgetExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_gender_pin_alone_bypasses_registry() {
        let synth = synthesizer(GameVersion::US);
        synth.registry().register(ProvenanceIdentity::new(
            GameVersion::US,
            LanguageId::English,
            "Registered",
            3,
            4,
        ));
        let spec = Specification::new("Darkrai").with_directive(Directive::pin("OT_Gender", "F"));

        let record = synth
            .synthesize_with_rng(&spec, &TargetContext::new(GameVersion::US), &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(record.trainer.ot_name, legalize_domain::identity::DEFAULT_OT_NAME);
        assert_eq!(record.trainer.ot_gender, legalize_domain::Gender::Female);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SynthesizerConfig {
            max_attempts: 0,
            ..SynthesizerConfig::default()
        };
        let result = CandidateSynthesizer::with_config(
            Arc::new(ProvenanceRegistry::new()),
            Arc::new(RecentIdentityCache::new()),
            OnlyOrigin {
                accept: GameVersion::Any,
                calls: AtomicUsize::new(0),
            },
            config,
        );
        assert!(matches!(result, Err(SynthesisFailure::InvalidConfig(_))));
    }

    #[test]
    fn test_identity_chain() {
        let synth = synthesizer(GameVersion::US);
        let spec = Specification::new("Darkrai");
        let ctx = TargetContext::new(GameVersion::US);
        let mut rng = StdRng::seed_from_u64(9);

        // Empty registry and cache: default identity
        let record = synth.synthesize_with_rng(&spec, &ctx, &mut rng).unwrap();
        assert_eq!(record.trainer.ot_name, legalize_domain::identity::DEFAULT_OT_NAME);

        // Cache is consulted when the registry misses
        synth.cache().set(ProvenanceIdentity::new(
            GameVersion::SW,
            LanguageId::French,
            "Cached",
            1,
            2,
        ));
        let record = synth.synthesize_with_rng(&spec, &ctx, &mut rng).unwrap();
        assert_eq!(record.trainer.ot_name, "Cached");

        // Registry wins over the cache
        synth.registry().register(ProvenanceIdentity::new(
            GameVersion::US,
            LanguageId::English,
            "Registered",
            3,
            4,
        ));
        let record = synth.synthesize_with_rng(&spec, &ctx, &mut rng).unwrap();
        assert_eq!(record.trainer.ot_name, "Registered");
        assert_eq!(synth.cache().get().map(|t| t.ot_name), Some("Registered".to_string()));
    }
}
