//! Concurrent batch synthesis

use crate::{CandidateSynthesizer, SynthesisFailure};
use legalize_domain::{Record, Specification, TargetContext, ValidatorOracle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Synthesize many specifications against one context
///
/// Each request runs on tokio's blocking pool, since oracle calls are
/// synchronous and may be slow. All requests share the synthesizer's
/// registry and cache. Results come back in input order.
pub async fn synthesize_batch<O>(
    synthesizer: Arc<CandidateSynthesizer<O>>,
    specs: Vec<Specification>,
    ctx: TargetContext,
) -> Vec<Result<Record, SynthesisFailure>>
where
    O: ValidatorOracle + Send + Sync + 'static,
{
    run_batch(synthesizer, specs, ctx, None).await
}

/// Like [`synthesize_batch`], with request `i` seeded by `seed + i`
///
/// Selection within each request is reproducible; requests that succeed
/// still update the shared cache in whatever order they finish.
pub async fn synthesize_batch_seeded<O>(
    synthesizer: Arc<CandidateSynthesizer<O>>,
    specs: Vec<Specification>,
    ctx: TargetContext,
    seed: u64,
) -> Vec<Result<Record, SynthesisFailure>>
where
    O: ValidatorOracle + Send + Sync + 'static,
{
    run_batch(synthesizer, specs, ctx, Some(seed)).await
}

async fn run_batch<O>(
    synthesizer: Arc<CandidateSynthesizer<O>>,
    specs: Vec<Specification>,
    ctx: TargetContext,
    seed: Option<u64>,
) -> Vec<Result<Record, SynthesisFailure>>
where
    O: ValidatorOracle + Send + Sync + 'static,
{
    let ctx = Arc::new(ctx);
    debug!(requests = specs.len(), context = %ctx.version, "Starting batch synthesis");

    let handles: Vec<JoinHandle<Result<Record, SynthesisFailure>>> = specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let synthesizer = Arc::clone(&synthesizer);
            let ctx = Arc::clone(&ctx);
            tokio::task::spawn_blocking(move || match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
                    synthesizer.synthesize_with_rng(&spec, &ctx, &mut rng)
                }
                None => synthesizer.synthesize(&spec, &ctx),
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| SynthesisFailure::TaskJoin(e.to_string()))
            .and_then(|r| r);
        results.push(result);
    }
    results
}
