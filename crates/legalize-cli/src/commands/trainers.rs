//! Trainers command implementation.

use super::{load_registry, parse_version};
use crate::cli::TrainersArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use legalize_domain::{GameVersion, ProvenanceIdentity};
use legalize_registry::ProvenanceRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Execute the trainers command.
pub fn execute_trainers(args: TrainersArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path: PathBuf = args
        .trainers
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.defaults.trainers.clone())
        .ok_or_else(|| {
            CliError::InvalidInput(
                "No trainer file; pass --trainers or set defaults.trainers".to_string(),
            )
        })?;
    let registry = load_registry(Some(&path))?;
    let version = args.version.as_deref().map(parse_version).transpose()?;

    if args.pick {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return match pick_trainer(&registry, version, args.generation, &mut rng)? {
            Some(trainer) => {
                println!("{}", formatter.format_trainers(&[trainer])?);
                Ok(())
            }
            None => {
                eprintln!("{}", formatter.warning("No matching trainer registered"));
                Ok(())
            }
        };
    }

    let trainers = list_trainers(&registry, version, args.generation);
    if !formatter.is_json() {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "{} trainer(s) in {} bucket(s)",
                registry.len(),
                registry.bucket_count()
            ))
        );
    }
    println!("{}", formatter.format_trainers(&trainers)?);
    Ok(())
}

/// Registered identities, optionally narrowed to a version (or group) or a generation.
pub fn list_trainers(
    registry: &ProvenanceRegistry,
    version: Option<GameVersion>,
    generation: Option<u8>,
) -> Vec<ProvenanceIdentity> {
    registry
        .versions()
        .into_iter()
        .filter(|v| version.is_none_or(|wanted| wanted.contains(*v)))
        .filter(|v| generation.is_none_or(|g| v.generation() == g))
        .flat_map(|v| registry.identities(v))
        .collect()
}

/// One random identity, selected the way synthesis selects them.
pub fn pick_trainer(
    registry: &ProvenanceRegistry,
    version: Option<GameVersion>,
    generation: Option<u8>,
    rng: &mut StdRng,
) -> Result<Option<ProvenanceIdentity>> {
    match (version, generation) {
        (Some(version), _) => Ok(registry.get_by_version(version, None, rng)),
        (None, Some(generation)) => Ok(registry.get_by_generation(generation, None, rng)),
        (None, None) => Err(CliError::InvalidInput(
            "--pick needs --version or --generation".to_string(),
        )),
    }
}
