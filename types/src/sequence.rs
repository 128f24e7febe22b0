//! The constructed sequence.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence must contain at least one element")]
pub struct EmptySequenceError;

/// An ordered, never-empty list of integers.
///
/// # Invariants
///
/// - Contains at least one element (the seed, for constructed sequences)
/// - Immutable once built: there are no mutating methods
///
/// # Serde
///
/// Serializes as a plain JSON array. Deserialization re-checks non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Sequence(Vec<i64>);

impl Sequence {
    /// Assemble a sequence from its seed and the elements admitted after it.
    #[must_use]
    pub fn from_parts(seed: i64, admitted: Vec<i64>) -> Self {
        let mut elements = Vec::with_capacity(admitted.len() + 1);
        elements.push(seed);
        elements.extend(admitted);
        Self(elements)
    }

    /// Wrap an externally supplied list, e.g. one read back from JSON.
    pub fn from_elements(elements: Vec<i64>) -> Result<Self, EmptySequenceError> {
        if elements.is_empty() {
            Err(EmptySequenceError)
        } else {
            Ok(Self(elements))
        }
    }

    /// The first element. Always present.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.0[0]
    }

    /// Elements after the seed.
    #[must_use]
    pub fn admitted(&self) -> &[i64] {
        &self.0[1..]
    }

    /// Exact sum of all elements.
    #[must_use]
    pub fn total(&self) -> i128 {
        self.0.iter().map(|&v| i128::from(v)).sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl TryFrom<Vec<i64>> for Sequence {
    type Error = EmptySequenceError;

    fn try_from(value: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_elements(value)
    }
}

impl From<Sequence> for Vec<i64> {
    fn from(value: Sequence) -> Self {
        value.0
    }
}

impl Deref for Sequence {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[i64]> for Sequence {
    fn as_ref(&self) -> &[i64] {
        self.as_slice()
    }
}

/// Bracketed, comma-separated: `[118, 125]`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
