//! Parallel sampling tests

use stratum_core::{SampleError, SamplePlan, SeededSource, build, sample, sampling::run_seed, verify};
use stratum_types::Params;

use crate::common::reference_params;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn worker_count_does_not_change_the_report() {
    let params = Params::new(2, 6, 16).unwrap();
    let mut reports = Vec::new();
    for workers in [1, 2, 5, 16] {
        let plan = SamplePlan {
            runs: 300,
            workers,
            base_seed: 1234,
        };
        reports.push(sample(params, plan).await.unwrap());
    }
    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn different_base_seeds_give_independent_runs() {
    let params = Params::new(2, 2, 64).unwrap();
    let plan = |base_seed| SamplePlan {
        runs: 50,
        workers: 2,
        base_seed,
    };
    let a = sample(params, plan(1)).await.unwrap();
    let b = sample(params, plan(1_000_000)).await.unwrap();
    assert_eq!(a.runs, b.runs);
    assert_ne!(a.length_histogram, b.length_histogram);
}

#[tokio::test]
async fn report_agrees_with_individual_builds() {
    let params = Params::new(5, 10, 20).unwrap();
    let plan = SamplePlan {
        runs: 40,
        workers: 4,
        base_seed: 77,
    };
    let report = sample(params, plan).await.unwrap();

    let mut valid_runs = 0;
    for run in 0..40 {
        let sequence = build(5, 10, 20, SeededSource::new(run_seed(77, run))).unwrap();
        if verify(&sequence, 10).unwrap() {
            valid_runs += 1;
        }
        assert!(report.length_histogram.contains_key(&sequence.len()));
    }
    assert_eq!(report.valid_runs, valid_runs);
}

#[tokio::test]
async fn reference_parameters_never_verify() {
    let plan = SamplePlan {
        runs: 25,
        workers: 4,
        base_seed: 0,
    };
    let report = sample(reference_params(), plan).await.unwrap();
    assert_eq!(report.valid_runs, 0);
    assert_eq!(report.length_histogram.get(&1), Some(&25));
}

#[tokio::test]
async fn empty_plan_is_an_error() {
    let plan = SamplePlan {
        runs: 0,
        workers: 1,
        base_seed: 0,
    };
    let err = sample(reference_params(), plan).await.unwrap_err();
    assert!(matches!(err, SampleError::EmptyPlan));
}
