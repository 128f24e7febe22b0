//! Subcommand implementations. Each writes its report to `out`.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::json;

use stratum_cipher::{CipherDemo, DEMO_PLAINTEXT};
use stratum_config::{
    HierarchyOverrides, ResolvedHierarchy, SampleOverrides, StratumConfig, resolve_cipher_key,
    resolve_hierarchy, resolve_sample,
};
use stratum_core::{
    SamplePlan, SeededSource, construct, render_outcome, render_sample_report, render_trace,
    sample, verify_with,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub trace: bool,
    pub json: bool,
}

fn resolve(
    overrides: HierarchyOverrides,
    config: Option<&StratumConfig>,
) -> Result<(ResolvedHierarchy, u64)> {
    let resolved =
        resolve_hierarchy(overrides, config).context("invalid hierarchy parameters")?;
    let rng_seed = resolved.rng_seed.unwrap_or_else(SeededSource::fresh_seed);
    tracing::info!(params = %resolved.params, rng_seed, "parameters resolved");
    Ok((resolved, rng_seed))
}

pub fn run_build(
    out: &mut impl Write,
    overrides: HierarchyOverrides,
    config: Option<&StratumConfig>,
    options: BuildOptions,
) -> Result<()> {
    let (resolved, rng_seed) = resolve(overrides, config)?;
    let params = resolved.params;

    let construction = construct(&params, SeededSource::new(rng_seed));
    let valid = verify_with(&construction.sequence(), &params);

    if options.json {
        let report = json!({
            "sequence": construction.sequence(),
            "valid": valid,
            "rng_seed": rng_seed,
        });
        writeln!(out, "{report}")?;
        return Ok(());
    }

    if options.trace {
        writeln!(out, "{params} rng_seed={rng_seed}")?;
        write!(out, "{}", render_trace(&construction))?;
    }
    writeln!(out, "{}", render_outcome(&construction.sequence(), valid))?;
    Ok(())
}

pub async fn run_sample(
    out: &mut impl Write,
    overrides: HierarchyOverrides,
    sample_overrides: SampleOverrides,
    config: Option<&StratumConfig>,
    json: bool,
) -> Result<()> {
    let (resolved, rng_seed) = resolve(overrides, config)?;
    let settings = resolve_sample(sample_overrides, config);
    let plan = SamplePlan {
        runs: settings.runs,
        workers: settings.workers,
        base_seed: rng_seed,
    };

    let report = sample(resolved.params, plan).await?;

    if json {
        let value = json!({
            "params": {
                "seed": resolved.params.seed(),
                "bound": resolved.params.bound(),
                "levels": resolved.params.target_levels(),
            },
            "rng_seed": rng_seed,
            "report": report,
        });
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "{} rng_seed={rng_seed}", resolved.params)?;
        write!(out, "{}", render_sample_report(&report))?;
    }
    Ok(())
}

pub fn run_cipher(
    out: &mut impl Write,
    key: Option<&str>,
    text: Option<&str>,
    config: Option<&StratumConfig>,
) -> Result<()> {
    let key = resolve_cipher_key(key, config);
    if key.is_empty() {
        tracing::warn!("empty cipher key; the cipher is the identity transform");
    }
    let plaintext = text.unwrap_or(DEMO_PLAINTEXT);

    let demo = CipherDemo::run(plaintext.as_bytes(), key.as_bytes());
    write!(out, "{}", demo.render())?;
    Ok(())
}
