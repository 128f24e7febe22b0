//! Core domain types for Stratum.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Holding a [`Params`] is proof that a construction run can proceed without
//! dividing by zero; holding a [`Sequence`] is proof that it starts with the seed.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod admission;
mod params;
mod sequence;

pub use admission::{Admission, Construction, LevelOutcome, Rejection};
pub use params::{ConfigurationError, Params};
pub use sequence::{EmptySequenceError, Sequence};
