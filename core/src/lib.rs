//! Core domain logic for Stratum.
//!
//! - [`builder`]: seed-first sequence construction with a two-stage admission filter
//! - [`verifier`]: the aggregate sum check against the bound
//! - [`random`]: the injected [`RandomSource`] capability and its implementations
//! - [`sampling`]: many independent constructions in parallel

pub mod builder;
mod display;
pub mod random;
pub mod sampling;
pub mod verifier;

pub use builder::{attempt_level, build, construct};
pub use display::{format_sequence, render_outcome, render_sample_report, render_trace};
pub use random::{CountingSource, MinimumSource, RandomSource, ScriptedSource, SeededSource};
pub use sampling::{SampleError, SamplePlan, SampleReport, sample};
pub use verifier::{verify, verify_with};
