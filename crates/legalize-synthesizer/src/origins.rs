//! Candidate origin ordering
//!
//! Pure: depends only on the specification, the target context, and the
//! static encounter table, so the search order can be tested without running
//! the validator.

use legalize_domain::{EncounterTemplate, GameVersion, OriginConstraint, Specification, TargetContext};
use std::cmp::Reverse;

/// Origin versions to try for a specification, best first
///
/// Candidates are the versions with an encounter for the species and form,
/// no newer than the context's generation. A version directive narrows the
/// set to that version (or the members of that group), a generation
/// directive to that generation; both apply together. A directive whose
/// value cannot be interpreted leaves nothing to try.
///
/// Order: the context's own version, then newer generations before older,
/// then ascending version id.
pub fn candidate_origins(spec: &Specification, ctx: &TargetContext) -> Vec<GameVersion> {
    let max_generation = match ctx.generation() {
        0 => u8::MAX,
        g => g,
    };

    let version = spec.origin_version();
    let generation = spec.origin_generation();
    if version == OriginConstraint::Unsatisfiable || generation == OriginConstraint::Unsatisfiable {
        return Vec::new();
    }

    let mut origins: Vec<GameVersion> =
        EncounterTemplate::for_species(&spec.species, spec.form.as_deref())
            .map(|t| t.version)
            .filter(|v| v.generation() <= max_generation)
            .filter(|v| match version {
                OriginConstraint::Fixed(wanted) => wanted.contains(*v),
                _ => true,
            })
            .filter(|v| match generation {
                OriginConstraint::Fixed(g) => v.generation() == g,
                _ => true,
            })
            .collect();

    origins.sort_by_key(|v| (*v != ctx.version, Reverse(v.generation()), v.id()));
    origins.dedup();
    origins
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalize_domain::Directive;
    use GameVersion::*;

    #[test]
    fn test_context_version_first() {
        let spec = Specification::new("Darkrai");
        let origins = candidate_origins(&spec, &TargetContext::new(US));
        assert_eq!(origins, vec![US, UM, W, B, D, P, Pt]);
    }

    #[test]
    fn test_newer_generations_before_older() {
        let spec = Specification::new("Darkrai");
        let origins = candidate_origins(&spec, &TargetContext::new(BD));
        assert_eq!(origins, vec![BD, SP, US, UM, W, B, D, P, Pt]);
    }

    #[test]
    fn test_context_generation_caps_origins() {
        let spec = Specification::new("Darkrai");
        let origins = candidate_origins(&spec, &TargetContext::new(X));
        assert_eq!(origins, vec![W, B, D, P, Pt]);
    }

    #[test]
    fn test_version_and_generation_directives() {
        let spec = Specification::new("Magikarp")
            .with_directive(Directive::hint("Version", "48"))
            .with_directive(Directive::restrict("Generation", "8"));
        assert_eq!(candidate_origins(&spec, &TargetContext::new(BD)), vec![BD]);

        // Pinned origin newer than the context: nothing to try
        assert!(candidate_origins(&spec, &TargetContext::new(US)).is_empty());
    }

    #[test]
    fn test_conflicting_directives_yield_nothing() {
        let spec = Specification::new("Magikarp")
            .with_directive(Directive::pin("Version", "BD"))
            .with_directive(Directive::restrict("Generation", "7"));
        assert!(candidate_origins(&spec, &TargetContext::new(SW)).is_empty());
    }

    #[test]
    fn test_group_version_directive() {
        let spec = Specification::new("Magikarp").with_directive(Directive::hint("Version", "SWSH"));
        assert_eq!(candidate_origins(&spec, &TargetContext::new(BD)), vec![SW, SH]);
    }

    #[test]
    fn test_unparseable_directive_yields_nothing() {
        let spec = Specification::new("Magikarp").with_directive(Directive::hint("Version", "???"));
        assert!(candidate_origins(&spec, &TargetContext::new(BD)).is_empty());
    }

    #[test]
    fn test_form_specific_origins() {
        let spec = Specification::new("Meowstic").with_form("F");
        assert_eq!(
            candidate_origins(&spec, &TargetContext::new(US)),
            vec![US, UM, X, Y]
        );
    }

    #[test]
    fn test_unknown_species_has_no_origins() {
        let spec = Specification::new("Missingno");
        assert!(candidate_origins(&spec, &TargetContext::new(SW)).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use legalize_domain::Directive;
    use proptest::prelude::*;

    fn species() -> impl Strategy<Value = Specification> {
        prop_oneof![
            Just(Specification::new("Pikachu")),
            Just(Specification::new("Eevee")),
            Just(Specification::new("Magikarp")),
            Just(Specification::new("Darkrai")),
            Just(Specification::new("Genesect")),
            Just(Specification::new("Meowstic").with_form("F")),
        ]
    }

    proptest! {
        /// Property: ordering is deterministic, duplicate-free, and capped by the context
        #[test]
        fn test_ordering_invariants(
            spec in species(),
            ctx in prop::sample::select(GameVersion::ALL.to_vec()).prop_map(TargetContext::new),
        ) {
            let origins = candidate_origins(&spec, &ctx);
            prop_assert_eq!(&origins, &candidate_origins(&spec, &ctx));

            for (i, v) in origins.iter().enumerate() {
                prop_assert!(!origins[i + 1..].contains(v));
                if ctx.generation() > 0 {
                    prop_assert!(v.generation() <= ctx.generation());
                }
            }

            if origins.contains(&ctx.version) {
                prop_assert_eq!(origins[0], ctx.version);
            }
        }

        /// Property: a version directive never lets another version through
        #[test]
        fn test_version_directive_is_exact(
            spec in species(),
            pinned in prop::sample::select(GameVersion::ALL.to_vec()),
        ) {
            let spec = spec.with_directive(Directive::pin("Version", pinned.id().to_string()));
            for v in candidate_origins(&spec, &TargetContext::new(GameVersion::SW)) {
                prop_assert!(pinned.contains(v));
            }
        }
    }
}
