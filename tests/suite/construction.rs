//! Sequence construction tests

use stratum_core::{
    CountingSource, MinimumSource, RandomSource, ScriptedSource, SeededSource, build, construct,
    verify,
};
use stratum_types::{Admission, ConfigurationError, Params, Rejection};

use crate::common::{REFERENCE_BOUND, REFERENCE_LEVELS, REFERENCE_SEED, reference_params};

#[test]
fn reference_run_with_minimum_draws_is_seed_only() {
    let sequence = build(
        REFERENCE_SEED,
        REFERENCE_BOUND,
        REFERENCE_LEVELS,
        MinimumSource,
    )
    .unwrap();
    assert_eq!(sequence.as_slice(), &[118]);
    assert_eq!(verify(&sequence, REFERENCE_BOUND), Ok(false));
}

#[test]
fn reference_seed_never_passes_stage_one() {
    // No candidate in [1, 100] is a multiple of 118.
    let params = reference_params();
    for rng_seed in 0..256 {
        let construction = construct(&params, SeededSource::new(rng_seed));
        assert_eq!(construction.sequence().as_slice(), &[118]);
        assert!(construction.outcomes().iter().all(|o| matches!(
            o.admission,
            Admission::Rejected(Rejection::Stage1 { .. })
        )));
    }
}

#[test]
fn zero_bound_and_zero_seed_fail_without_drawing() {
    let mut source = CountingSource::new(MinimumSource);
    assert_eq!(
        build(118, 0, 5, &mut source),
        Err(ConfigurationError::ZeroBound)
    );
    assert_eq!(
        build(0, 25, 5, &mut source),
        Err(ConfigurationError::ZeroSeed)
    );
    assert_eq!(source.draws(), 0);
}

#[test]
fn length_and_membership_invariants_hold() {
    let cases = [(1, 1, 10), (2, 2, 20), (2, 6, 20), (5, 10, 40), (10, 5, 40), (50, 3, 8)];
    for (seed, bound, levels) in cases {
        let params = Params::new(seed, bound, levels).unwrap();
        for rng_seed in 0..128 {
            let construction = construct(&params, SeededSource::new(rng_seed));
            let sequence = &construction.sequence();

            assert!((1..=levels as usize).contains(&sequence.len()));
            assert_eq!(sequence.seed(), seed);
            assert_eq!(construction.outcomes().len(), levels as usize - 1);
            assert_eq!(
                construction.admitted_count() + construction.rejected_count(),
                construction.outcomes().len()
            );

            for &element in sequence.admitted() {
                assert!(element >= seed && element < seed + bound);
                assert_eq!(element % bound, 0);
            }
        }
    }
}

#[test]
fn levels_are_numbered_from_one() {
    let params = Params::new(3, 9, 6).unwrap();
    let construction = construct(&params, SeededSource::new(5));
    let levels: Vec<u32> = construction.outcomes().iter().map(|o| o.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5]);
}

#[test]
fn admission_sequence_follows_script() {
    // seed 4, bound 8. Level 1 admits 8, level 2 fails stage 1,
    // level 3 fails stage 2 (extended 5), level 4 admits 8.
    let params = Params::new(4, 8, 5).unwrap();
    let script = [12, 4, 0, 9, 40, 1, 3, 100, 4, 3];
    let mut source = ScriptedSource::new(script);
    let construction = construct(&params, &mut source);

    assert_eq!(construction.sequence().as_slice(), &[4, 8, 8]);
    assert_eq!(source.remaining(), 0);
    assert_eq!(
        construction
            .outcomes()
            .iter()
            .map(|o| o.admission)
            .collect::<Vec<_>>(),
        vec![
            Admission::Admitted(8),
            Admission::Rejected(Rejection::Stage1 { candidate: 9 }),
            Admission::Rejected(Rejection::Stage2 {
                extended: 5,
                subset_draw: 3
            }),
            Admission::Admitted(8),
        ]
    );
}

#[test]
fn admission_rate_is_not_inflated_by_retries() {
    // seed 2, bound 2: stage 1 passes for even candidates (1/2), stage 2 for
    // even offsets (1/2). Expected admissions per level are 1/4.
    let params = Params::new(2, 2, 1001).unwrap();
    let mut admitted = 0;
    for rng_seed in 0..20 {
        admitted += construct(&params, SeededSource::new(rng_seed)).admitted_count();
    }
    let rate = admitted as f64 / 20_000.0;
    assert!((0.2..0.3).contains(&rate), "admission rate {rate}");
}

struct MaxSource;

impl RandomSource for MaxSource {
    fn draw_inclusive(&mut self, _low: i64, high: i64) -> i64 {
        high
    }

    fn draw_below(&mut self, upper: i64) -> i64 {
        upper - 1
    }
}

#[test]
fn custom_sources_plug_in() {
    // p = 100 passes for seed 10; g = 9 gives 19, not a multiple of 10.
    let sequence = build(10, 10, 4, MaxSource).unwrap();
    assert_eq!(sequence.as_slice(), &[10]);

    // seed 1, bound 1: the maximum of every range still admits.
    let sequence = build(1, 1, 4, MaxSource).unwrap();
    assert_eq!(sequence.as_slice(), &[1, 1, 1, 1]);
}
