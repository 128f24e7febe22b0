//! Parallel statistical sampling of independent constructions.
//!
//! Every run owns a [`SeededSource`] derived from the plan's base seed and the
//! run index. No generator is shared between runs, so the report depends only
//! on `(params, runs, base_seed)` and never on the worker count or scheduling.

use std::collections::BTreeMap;

use serde::Serialize;
use stratum_types::Params;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

use crate::builder::construct;
use crate::random::SeededSource;
use crate::verifier::verify_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    pub runs: usize,
    pub workers: usize,
    pub base_seed: u64,
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample plan needs at least one run and one worker")]
    EmptyPlan,
    #[error("sampling worker failed: {0}")]
    Worker(#[from] JoinError),
}

/// Aggregate statistics over all runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub runs: usize,
    /// Runs whose sequence passed verification.
    pub valid_runs: usize,
    /// Elements admitted after the seed, summed over all runs.
    pub admitted_elements: usize,
    /// Sequence length -> number of runs with that length.
    pub length_histogram: BTreeMap<usize, usize>,
    pub mean_length: f64,
}

impl SampleReport {
    #[must_use]
    pub fn valid_fraction(&self) -> f64 {
        self.valid_runs as f64 / self.runs as f64
    }
}

#[derive(Debug, Clone, Copy)]
struct RunSummary {
    length: usize,
    valid: bool,
}

#[derive(Debug, Default)]
struct Tally {
    valid_runs: usize,
    total_length: usize,
    length_histogram: BTreeMap<usize, usize>,
}

impl Tally {
    fn record(&mut self, run: RunSummary) {
        if run.valid {
            self.valid_runs += 1;
        }
        self.total_length += run.length;
        *self.length_histogram.entry(run.length).or_default() += 1;
    }

    fn finish(self, runs: usize) -> SampleReport {
        SampleReport {
            runs,
            valid_runs: self.valid_runs,
            admitted_elements: self.total_length - runs,
            length_histogram: self.length_histogram,
            mean_length: self.total_length as f64 / runs as f64,
        }
    }
}

/// Seed used by run `run` of a plan.
#[must_use]
pub const fn run_seed(base_seed: u64, run: usize) -> u64 {
    base_seed.wrapping_add(run as u64)
}

fn run_once(params: &Params, seed: u64) -> RunSummary {
    let sequence = construct(params, SeededSource::new(seed)).into_sequence();
    RunSummary {
        length: sequence.len(),
        valid: verify_with(&sequence, params),
    }
}

/// Run `plan.runs` constructions across `plan.workers` blocking tasks.
///
/// Must be called from within a tokio runtime.
pub async fn sample(params: Params, plan: SamplePlan) -> Result<SampleReport, SampleError> {
    if plan.runs == 0 || plan.workers == 0 {
        return Err(SampleError::EmptyPlan);
    }

    let workers = plan.workers.min(plan.runs);
    let chunk = plan.runs.div_ceil(workers);
    tracing::debug!(%params, runs = plan.runs, workers, chunk, base_seed = plan.base_seed, "sampling started");

    let mut tasks = JoinSet::new();
    for start in (0..plan.runs).step_by(chunk) {
        let end = (start + chunk).min(plan.runs);
        let base_seed = plan.base_seed;
        tasks.spawn_blocking(move || {
            (start..end)
                .map(|run| run_once(&params, run_seed(base_seed, run)))
                .collect::<Vec<_>>()
        });
    }

    let mut tally = Tally::default();
    while let Some(joined) = tasks.join_next().await {
        for run in joined? {
            tally.record(run);
        }
    }

    let report = tally.finish(plan.runs);
    tracing::debug!(
        valid_runs = report.valid_runs,
        mean_length = report.mean_length,
        "sampling finished"
    );
    Ok(report)
}
