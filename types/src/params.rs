//! Validated construction parameters.
//!
//! These types guarantee a usable seed/bound/level configuration by construction.

use std::fmt;

use thiserror::Error;

/// Rejected parameter set.
///
/// Every variant is raised before any randomness is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("seed must not be zero (it is used as a modulus)")]
    ZeroSeed,
    #[error("bound must not be zero (it is used as a modulus)")]
    ZeroBound,
    #[error("seed must be positive, got {0}")]
    NonPositiveSeed(i64),
    #[error("bound must be positive, got {0}")]
    NonPositiveBound(i64),
    #[error("target levels must be at least 1")]
    ZeroTargetLevels,
    #[error("seed ({seed}) + bound ({bound}) - 1 does not fit in a 64-bit integer")]
    Overflow { seed: i64, bound: i64 },
}

impl ConfigurationError {
    /// Check a bound used only as a divisor.
    ///
    /// Verification accepts any non-zero bound; construction is stricter.
    pub const fn check_divisor(bound: i64) -> Result<(), Self> {
        if bound == 0 {
            Err(Self::ZeroBound)
        } else {
            Ok(())
        }
    }
}

/// Parameters for one construction run.
///
/// # Invariants
///
/// - `seed > 0`, so `[0, seed)` is non-empty and `p mod seed` is defined
/// - `bound > 0`, so `[0, bound)` is non-empty and `x mod bound` is defined
/// - `target_levels >= 1`
/// - `seed + bound - 1` fits in `i64`, so no admitted element can overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    seed: i64,
    bound: i64,
    target_levels: u32,
}

impl Params {
    pub const fn new(seed: i64, bound: i64, target_levels: u32) -> Result<Self, ConfigurationError> {
        if seed == 0 {
            return Err(ConfigurationError::ZeroSeed);
        }
        if bound == 0 {
            return Err(ConfigurationError::ZeroBound);
        }
        if seed < 0 {
            return Err(ConfigurationError::NonPositiveSeed(seed));
        }
        if bound < 0 {
            return Err(ConfigurationError::NonPositiveBound(bound));
        }
        if target_levels == 0 {
            return Err(ConfigurationError::ZeroTargetLevels);
        }
        if seed.checked_add(bound - 1).is_none() {
            return Err(ConfigurationError::Overflow { seed, bound });
        }
        Ok(Self {
            seed,
            bound,
            target_levels,
        })
    }

    #[must_use]
    pub const fn seed(self) -> i64 {
        self.seed
    }

    #[must_use]
    pub const fn bound(self) -> i64 {
        self.bound
    }

    #[must_use]
    pub const fn target_levels(self) -> u32 {
        self.target_levels
    }

    /// Levels that draw randomness. The seed occupies level 0.
    #[must_use]
    pub const fn attempted_levels(self) -> u32 {
        self.target_levels - 1
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed={} bound={} levels={}",
            self.seed, self.bound, self.target_levels
        )
    }
}
