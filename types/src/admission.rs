//! Per-level construction outcomes.
//!
//! Each level is a single attempt. It either admits exactly one element or is
//! rejected; a rejected level is never retried.

use std::fmt;

use crate::Sequence;

/// Which admission stage turned a level away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate drawn from `[1, 100]` is not a multiple of the seed.
    Stage1 { candidate: i64 },
    /// The extended value failed the subset check or is not a multiple of the bound.
    Stage2 { extended: i64, subset_draw: i64 },
}

/// Outcome of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted(i64),
    Rejected(Rejection),
}

impl Admission {
    #[must_use]
    pub const fn admitted_value(self) -> Option<i64> {
        match self {
            Self::Admitted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub const fn is_admitted(self) -> bool {
        matches!(self, Self::Admitted(_))
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admitted(value) => write!(f, "admitted {value}"),
            Self::Rejected(Rejection::Stage1 { candidate }) => {
                write!(f, "rejected at stage 1 (candidate {candidate})")
            }
            Self::Rejected(Rejection::Stage2 {
                extended,
                subset_draw,
            }) => write!(
                f,
                "rejected at stage 2 (extended {extended}, subset draw {subset_draw})"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutcome {
    /// 1-based; level 0 is the seed and never draws.
    pub level: u32,
    pub admission: Admission,
}

/// A finished construction with its per-level trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    sequence: Sequence,
    outcomes: Vec<LevelOutcome>,
}

impl Construction {
    /// Rebuild from outcomes. The sequence is derived, so the two cannot disagree.
    #[must_use]
    pub fn from_outcomes(seed: i64, outcomes: Vec<LevelOutcome>) -> Self {
        let admitted = outcomes
            .iter()
            .filter_map(|outcome| outcome.admission.admitted_value())
            .collect();
        Self {
            sequence: Sequence::from_parts(seed, admitted),
            outcomes,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// One entry per attempted level, in level order.
    #[must_use]
    pub fn outcomes(&self) -> &[LevelOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn into_sequence(self) -> Sequence {
        self.sequence
    }

    #[must_use]
    pub fn admitted_count(&self) -> usize {
        self.count_where(Admission::is_admitted)
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.count_where(|admission| !admission.is_admitted())
    }

    fn count_where(&self, predicate: impl Fn(Admission) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| predicate(outcome.admission))
            .count()
    }
}
