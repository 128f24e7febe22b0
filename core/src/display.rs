//! Human-readable renderings of construction results.

use std::fmt::Write as _;

use stratum_types::{Construction, Sequence};

use crate::sampling::SampleReport;

/// Bracketed, comma-separated list: `[118, 125]`.
#[must_use]
pub fn format_sequence(sequence: &Sequence) -> String {
    sequence.to_string()
}

/// The one-line verdict printed after a build.
#[must_use]
pub fn render_outcome(sequence: &Sequence, valid: bool) -> String {
    if valid {
        format!("Hierarchy constructed: {}", format_sequence(sequence))
    } else {
        "Invalid hierarchy".to_string()
    }
}

/// One line per attempted level, numbered from 1.
#[must_use]
pub fn render_trace(construction: &Construction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "level 0: seed {}", construction.sequence().seed());
    for outcome in construction.outcomes() {
        let _ = writeln!(out, "level {}: {}", outcome.level, outcome.admission);
    }
    out
}

#[must_use]
pub fn render_sample_report(report: &SampleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "runs:              {}", report.runs);
    let _ = writeln!(
        out,
        "valid hierarchies: {} ({:.1}%)",
        report.valid_runs,
        report.valid_fraction() * 100.0
    );
    let _ = writeln!(out, "admitted elements: {}", report.admitted_elements);
    let _ = writeln!(out, "mean length:       {:.3}", report.mean_length);
    out.push_str("length histogram:\n");
    for (length, count) in &report.length_histogram {
        let _ = writeln!(out, "  {length:>3}: {count}");
    }
    out
}
