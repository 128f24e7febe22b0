//! Aggregate verification of a finished sequence.

use stratum_types::{ConfigurationError, Params, Sequence};

/// `true` when the sum of all elements is a multiple of `bound`.
///
/// Pure. Any non-zero bound is accepted; a zero bound is a configuration error.
pub fn verify(sequence: &Sequence, bound: i64) -> Result<bool, ConfigurationError> {
    ConfigurationError::check_divisor(bound)?;
    Ok(is_multiple(sequence, bound))
}

/// Verify against validated parameters. Infallible because `Params` proves `bound > 0`.
#[must_use]
pub fn verify_with(sequence: &Sequence, params: &Params) -> bool {
    is_multiple(sequence, params.bound())
}

fn is_multiple(sequence: &Sequence, bound: i64) -> bool {
    sequence.total() % i128::from(bound) == 0
}
