//! Stochastic sequence construction.
//!
//! A run starts from the seed and makes one admission attempt per level:
//!
//! ```text
//! p in [1, 100] --(p mod seed == 0)--> g in [0, bound) --> extended = seed + g
//!                                       a in [0, seed) --(a < seed && extended mod bound == 0)--> admit
//! ```
//!
//! A failed stage consumes the level. There is no retry, so the sequence length
//! is a random variable in `[1, target_levels]`.

use stratum_types::{
    Admission, ConfigurationError, Construction, LevelOutcome, Params, Rejection, Sequence,
};

use crate::random::RandomSource;

/// Closed range for the stage-1 candidate.
pub const CANDIDATE_MIN: i64 = 1;
pub const CANDIDATE_MAX: i64 = 100;

/// Validate raw parameters and build a sequence.
///
/// Fails before drawing anything when the parameters are unusable.
pub fn build<R: RandomSource>(
    seed: i64,
    bound: i64,
    target_levels: u32,
    rng: R,
) -> Result<Sequence, ConfigurationError> {
    let params = Params::new(seed, bound, target_levels)?;
    Ok(construct(&params, rng).into_sequence())
}

/// Run every level and keep the per-level outcomes.
pub fn construct<R: RandomSource>(params: &Params, mut rng: R) -> Construction {
    let outcomes: Vec<LevelOutcome> = (1..=params.attempted_levels())
        .map(|level| {
            let admission = attempt_level(params, &mut rng);
            match admission {
                Admission::Admitted(value) => tracing::trace!(level, value, "level admitted"),
                Admission::Rejected(reason) => tracing::trace!(level, ?reason, "level rejected"),
            }
            LevelOutcome { level, admission }
        })
        .collect();

    let construction = Construction::from_outcomes(params.seed(), outcomes);
    tracing::debug!(
        seed = params.seed(),
        bound = params.bound(),
        levels = params.target_levels(),
        length = construction.sequence().len(),
        "construction finished"
    );
    construction
}

/// One admission attempt.
///
/// Draw order is fixed: candidate, then (only past stage 1) offset, then subset draw.
pub fn attempt_level(params: &Params, rng: &mut impl RandomSource) -> Admission {
    let seed = params.seed();
    let bound = params.bound();

    let candidate = rng.draw_inclusive(CANDIDATE_MIN, CANDIDATE_MAX);
    if candidate % seed != 0 {
        return Admission::Rejected(Rejection::Stage1 { candidate });
    }

    let offset = rng.draw_below(bound);
    // In-range offsets stay <= seed + bound - 1, which Params proved fits.
    let extended = seed.saturating_add(offset);
    let subset_draw = rng.draw_below(seed);

    // `subset_draw < seed` holds for every in-range draw; it is still checked.
    if subset_draw < seed && extended % bound == 0 {
        Admission::Admitted(extended)
    } else {
        Admission::Rejected(Rejection::Stage2 {
            extended,
            subset_draw,
        })
    }
}
