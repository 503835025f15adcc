//! End-to-end synthesis against the reference gatekeeper

use legalize_domain::{
    Directive, Gender, GameVersion, LanguageId, Nature, ProvenanceIdentity, Specification, Stat,
    StatSpread, TargetContext, ValidatorOracle,
};
use legalize_gatekeeper::Gatekeeper;
use legalize_registry::{ProvenanceRegistry, RecentIdentityCache};
use legalize_synthesizer::{
    synthesize_batch, synthesize_batch_seeded, CandidateSynthesizer, SynthesisFailure,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Synthesizer with the save trainer registered and marked recent
fn setup(game: GameVersion) -> CandidateSynthesizer<Gatekeeper> {
    let registry = Arc::new(ProvenanceRegistry::new());
    let cache = Arc::new(RecentIdentityCache::new());
    let save = ProvenanceIdentity::from_save(game, LanguageId::English, "ALM", 24680, 13579);
    registry.register_recent(save, &cache);

    CandidateSynthesizer::new(registry, cache, Gatekeeper::default_config())
}

fn darkrai() -> Specification {
    Specification::new("Darkrai")
        .with_iv(Stat::Atk, 7)
        .with_ability("Bad Dreams")
        .shiny(true)
        .with_nature(Nature::Timid)
        .with_moves(["Hypnosis", "Feint Attack", "Nightmare", "Double Team"])
}

fn genesect() -> Specification {
    Specification::new("Genesect")
        .with_ability("Download")
        .shiny(true)
        .with_nature(Nature::Hasty)
        .with_moves(["Extreme Speed", "Techno Blast", "Blaze Kick", "Shift Gear"])
}

fn meowstic() -> Specification {
    Specification::new("Meowstic")
        .with_form("F")
        .with_item("Life Orb")
        .with_ability("Competitive")
        .with_ev(Stat::Def, 4)
        .with_ev(Stat::SpA, 252)
        .with_ev(Stat::Spe, 252)
        .with_nature(Nature::Timid)
        .with_moves(["Psyshock", "Signal Beam", "Hidden Power Ground", "Calm Mind"])
}

fn magikarp() -> Specification {
    Specification::new("Magikarp")
        .with_nickname("ポッちゃん")
        .with_gender(Gender::Female)
        .with_item("Lum Berry")
        .with_iv(Stat::Hp, 3)
        .with_iv(Stat::Atk, 3)
        .with_iv(Stat::SpA, 11)
        .with_iv(Stat::SpD, 3)
        .with_iv(Stat::Spe, 2)
        .with_ability("Swift Swim")
        .with_level(45)
        .with_nature(Nature::Mild)
        .with_language(LanguageId::German)
        .with_directive(Directive::pin("OT_Name", "マイスター"))
        .with_directive(Directive::pin("Met_Location", "30001"))
        .with_directive(Directive::hint("Version", "48"))
        .with_directive(Directive::restrict("Generation", "8"))
        .with_move("Splash")
}

#[test]
fn test_darkrai_modern_contexts() {
    for game in [
        GameVersion::X,
        GameVersion::OR,
        GameVersion::US,
        GameVersion::UM,
        GameVersion::SW,
        GameVersion::BD,
        GameVersion::SP,
    ] {
        let synth = setup(game);
        let record = synth
            .synthesize(&darkrai(), &TargetContext::new(game))
            .unwrap_or_else(|e| panic!("{} failed: {}", game, e));

        assert_eq!(record.species, "Darkrai");
        assert!(record.shiny);
        assert!(record.is_shiny_by_pid());
        assert_eq!(record.nature, Nature::Timid);
        assert_eq!(record.ability, "Bad Dreams");
        assert_eq!(record.ivs.get(Stat::Atk), 7);
        assert!(synth.oracle().evaluate(&record).accepted);
    }
}

#[test]
fn test_darkrai_skips_shiny_locked_origins() {
    let synth = setup(GameVersion::BD);
    let record = synth
        .synthesize(&darkrai(), &TargetContext::new(GameVersion::BD))
        .unwrap();
    // BD and SP are shiny locked
    assert_eq!(record.origin_version, GameVersion::US);
}

#[test]
fn test_magikarp_pinned_origin() {
    let synth = setup(GameVersion::BD);
    let record = synth
        .synthesize(&magikarp(), &TargetContext::new(GameVersion::BD))
        .unwrap();

    assert_eq!(record.origin_version, GameVersion::BD);
    assert_eq!(record.met_location, 30001);
    assert_eq!(record.trainer.ot_name, "マイスター");
    assert_eq!(record.language, LanguageId::German);
    assert_eq!(record.level, 45);
    assert_eq!(record.ivs, StatSpread([3, 3, 31, 11, 3, 2]));
    assert_eq!(record.nickname.as_deref(), Some("ポッちゃん"));
}

#[test]
fn test_magikarp_never_substitutes_origin() {
    let synth = setup(GameVersion::US);
    let result = synth.synthesize(&magikarp(), &TargetContext::new(GameVersion::US));
    assert!(matches!(result, Err(SynthesisFailure::NoValidOrigin { .. })));
}

#[test]
fn test_genesect_event() {
    let synth = setup(GameVersion::B2);
    let record = synth
        .synthesize(&genesect(), &TargetContext::new(GameVersion::B2))
        .unwrap();
    assert_eq!(record.origin_version, GameVersion::B2);
    assert!(record.is_shiny_by_pid());
    assert_eq!(record.nature, Nature::Hasty);
}

#[test]
fn test_meowstic_female_form() {
    let synth = setup(GameVersion::US);
    let record = synth
        .synthesize(&meowstic(), &TargetContext::new(GameVersion::US))
        .unwrap();
    assert_eq!(record.display_species(), "Meowstic-F");
    assert_eq!(record.gender, Gender::Female);
    assert_eq!(record.evs.total(), 508);
    assert_eq!(record.held_item.as_deref(), Some("Life Orb"));
}

#[test]
fn test_pinned_ot_beats_registry() {
    let synth = setup(GameVersion::BD);
    for name in ["Barry", "Dawn", "Lucas"] {
        synth.registry().register(ProvenanceIdentity::new(
            GameVersion::BD,
            LanguageId::German,
            name,
            1,
            1,
        ));
    }

    let record = synth
        .synthesize(&magikarp(), &TargetContext::new(GameVersion::BD))
        .unwrap();
    assert_eq!(record.trainer.ot_name, "マイスター");
}

#[test]
fn test_success_updates_recent_cache() {
    let synth = setup(GameVersion::BD);
    synth
        .synthesize(&magikarp(), &TargetContext::new(GameVersion::BD))
        .unwrap();

    let recent = synth.cache().get().unwrap();
    assert_eq!(recent.ot_name, "マイスター");
}

#[test]
fn test_seeded_synthesis_is_reproducible() {
    let synth = setup(GameVersion::US);
    for (name, tid) in [("Sun", 1), ("Moon", 2), ("Lillie", 3)] {
        synth.registry().register(ProvenanceIdentity::new(
            GameVersion::US,
            LanguageId::English,
            name,
            tid,
            tid,
        ));
    }
    let ctx = TargetContext::new(GameVersion::US);

    let a = synth
        .synthesize_with_rng(&meowstic(), &ctx, &mut StdRng::seed_from_u64(77))
        .unwrap();
    let b = synth
        .synthesize_with_rng(&meowstic(), &ctx, &mut StdRng::seed_from_u64(77))
        .unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_batch_preserves_order() {
    let synth = Arc::new(setup(GameVersion::US));
    let specs = vec![darkrai(), genesect(), meowstic(), magikarp()];

    let results = synthesize_batch(synth, specs, TargetContext::new(GameVersion::US)).await;
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().species, "Darkrai");
    // Only the generation 5 events allow a shiny Genesect
    assert_eq!(results[1].as_ref().unwrap().origin_version, GameVersion::W2);
    assert_eq!(results[2].as_ref().unwrap().display_species(), "Meowstic-F");
    assert!(results[3].is_err());
}

#[tokio::test]
async fn test_seeded_batch_is_reproducible() {
    let specs = vec![darkrai(), meowstic()];
    let ctx = TargetContext::new(GameVersion::US);

    let first =
        synthesize_batch_seeded(Arc::new(setup(GameVersion::US)), specs.clone(), ctx.clone(), 5)
            .await;
    let second = synthesize_batch_seeded(Arc::new(setup(GameVersion::US)), specs, ctx, 5).await;
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: a pinned origin is either used exactly or the synthesis fails
    #[test]
    fn test_pinned_origin_is_never_substituted(
        game in prop::sample::select(vec![
            GameVersion::X, GameVersion::US, GameVersion::SW,
            GameVersion::BD, GameVersion::SP, GameVersion::PLA,
        ]),
        seed in any::<u64>(),
    ) {
        let synth = setup(game);
        let mut rng = StdRng::seed_from_u64(seed);
        match synth.synthesize_with_rng(&magikarp(), &TargetContext::new(game), &mut rng) {
            Ok(record) => prop_assert_eq!(record.origin_version, GameVersion::BD),
            Err(SynthesisFailure::NoValidOrigin { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected failure {:?}", other),
        }
    }
}
