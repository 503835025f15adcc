//! Generate command implementation.

use super::{load_registry, parse_version};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::spec_file::load_specification;
use legalize_domain::{Record, Specification, TargetContext};
use legalize_gatekeeper::{Gatekeeper, ValidationConfig};
use legalize_registry::RecentIdentityCache;
use legalize_synthesizer::{
    synthesize_batch, synthesize_batch_seeded, CandidateSynthesizer, SynthesisFailure,
    SynthesizerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Execute the generate command.
pub async fn execute_generate(args: GenerateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let total = args.specs.len();
    let mut results = generate(&args, config).await?;

    if total == 1 {
        if let Some(result) = results.pop() {
            println!("{}", formatter.format_record(&result?)?);
        }
        return Ok(());
    }

    let mut records = Vec::new();
    let mut failed = 0;
    for (path, result) in args.specs.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(failure) => {
                failed += 1;
                eprintln!("{}", formatter.error(&format!("{}: {}", path, failure)));
            }
        }
    }

    println!("{}", formatter.format_records(&records)?);

    if failed > 0 {
        return Err(CliError::Incomplete { failed, total });
    }
    Ok(())
}

/// Synthesize every specification named by `args`, in order.
pub async fn generate(
    args: &GenerateArgs,
    config: &Config,
) -> Result<Vec<std::result::Result<Record, SynthesisFailure>>> {
    let version = args
        .version
        .as_deref()
        .or(config.defaults.version.as_deref())
        .ok_or_else(|| {
            CliError::InvalidInput(
                "No target version; pass --version or set defaults.version".to_string(),
            )
        })
        .and_then(parse_version)?;

    let specs = args
        .specs
        .iter()
        .map(|path| load_specification(Path::new(path)))
        .collect::<Result<Vec<Specification>>>()?;

    let trainers: Option<PathBuf> = args
        .trainers
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.defaults.trainers.clone());
    let registry = Arc::new(load_registry(trainers.as_deref())?);

    let rules: ValidationConfig = args.rules.map(Into::into).unwrap_or_else(|| config.validation.clone());
    let budget: SynthesizerConfig = args.preset.map(Into::into).unwrap_or_else(|| config.synthesizer.clone());

    let synthesizer = Arc::new(CandidateSynthesizer::with_config(
        Arc::clone(&registry),
        Arc::new(RecentIdentityCache::new()),
        Gatekeeper::try_new(rules)?,
        budget,
    )?);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ctx = TargetContext::new(version);
    if let Some(owner) = registry.get_by_version(version, None, &mut rng) {
        info!(ot_name = %owner.ot_name, "Using registered trainer as save owner");
        ctx = ctx.with_trainer(owner);
    }

    info!(
        context = %version,
        requests = specs.len(),
        trainers = registry.len(),
        "Generating records"
    );

    if let [spec] = specs.as_slice() {
        return Ok(vec![synthesizer.synthesize_with_rng(spec, &ctx, &mut rng)]);
    }

    Ok(match args.seed {
        Some(seed) => synthesize_batch_seeded(synthesizer, specs, ctx, seed).await,
        None => synthesize_batch(synthesizer, specs, ctx).await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalize_domain::GameVersion;
    use std::fs;

    const DARKRAI: &str = r#"
species = "Darkrai"
ability = "Bad Dreams"
nature = "Timid"
ivs = { Atk = 7 }
moves = ["Hypnosis", "Feint Attack", "Nightmare", "Double Team"]
"#;

    const TRAINERS: &str = r#"
[[trainers]]
version = "US"
language = "English"
ot_name = "Ash"
tid = 3
sid = 4
"#;

    fn args(specs: Vec<String>, trainers: Option<String>) -> GenerateArgs {
        GenerateArgs {
            specs,
            version: Some("US".to_string()),
            trainers,
            seed: Some(42),
            preset: None,
            rules: None,
        }
    }

    #[tokio::test]
    async fn test_generate_with_registered_trainer() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("darkrai.toml");
        let trainers = dir.path().join("trainers.toml");
        fs::write(&spec, DARKRAI).unwrap();
        fs::write(&trainers, TRAINERS).unwrap();

        let args = args(
            vec![spec.display().to_string()],
            Some(trainers.display().to_string()),
        );
        let mut results = generate(&args, &Config::default()).await.unwrap();

        let record = results.pop().unwrap().unwrap();
        assert_eq!(record.origin_version, GameVersion::US);
        assert_eq!(record.trainer.ot_name, "Ash");
        assert_eq!(record.ivs.0, [31, 7, 31, 31, 31, 31]);
    }

    #[tokio::test]
    async fn test_generate_batch_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let darkrai = dir.path().join("darkrai.toml");
        let unknown = dir.path().join("unknown.json");
        fs::write(&darkrai, DARKRAI).unwrap();
        fs::write(&unknown, r#"{"species": "Missingno", "moves": ["Tackle"]}"#).unwrap();

        let args = args(
            vec![darkrai.display().to_string(), unknown.display().to_string()],
            None,
        );
        let results = generate(&args, &Config::default()).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].as_ref().map(|r| r.trainer.ot_name.as_str()),
            Ok(legalize_domain::identity::DEFAULT_OT_NAME)
        );
        assert_eq!(
            results[1],
            Err(SynthesisFailure::UnknownSpecies("Missingno".to_string()))
        );
    }

    #[tokio::test]
    async fn test_generate_needs_a_version() {
        let mut args = args(vec!["darkrai.toml".to_string()], None);
        args.version = None;
        let result = generate(&args, &Config::default()).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_generate_uses_config_default_version() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("darkrai.toml");
        fs::write(&spec, DARKRAI).unwrap();

        let mut args = args(vec![spec.display().to_string()], None);
        args.version = None;
        let mut config = Config::default();
        config.defaults.version = Some("BD".to_string());

        let record = generate(&args, &config).await.unwrap().pop().unwrap().unwrap();
        assert_eq!(record.origin_version, GameVersion::BD);
        assert_eq!(record.generation, 8);
    }
}
