//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use stratum_types::{Params, Sequence};

/// Parameters of the reference demo run.
pub const REFERENCE_SEED: i64 = 118;
pub const REFERENCE_BOUND: i64 = 25;
pub const REFERENCE_LEVELS: u32 = 5;

pub fn reference_params() -> Params {
    Params::new(REFERENCE_SEED, REFERENCE_BOUND, REFERENCE_LEVELS).unwrap()
}

pub fn seq(values: &[i64]) -> Sequence {
    Sequence::from_elements(values.to_vec()).unwrap()
}

/// Write `content` to `config.toml` inside `dir` and return its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}
