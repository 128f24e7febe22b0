//! Configuration loading and resolution for Stratum.
//!
//! The config file is optional. Values are layered: command-line flags win
//! over the file, and the file wins over built-in defaults.
//!
//! ```toml
//! [hierarchy]
//! seed = 118
//! bound = 25
//! levels = 5
//! rng_seed = 42
//!
//! [sample]
//! runs = 1000
//! workers = 8
//!
//! [cipher]
//! key = "${STRATUM_CIPHER_KEY}"
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io, thread};

use serde::Deserialize;
use stratum_types::{ConfigurationError, Params};
use thiserror::Error;
use toml::de;

pub const DEFAULT_SEED: i64 = 118;
pub const DEFAULT_BOUND: i64 = 25;
pub const DEFAULT_LEVELS: u32 = 5;
pub const DEFAULT_RUNS: usize = 1000;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "STRATUM_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct StratumConfig {
    pub hierarchy: Option<HierarchyConfig>,
    pub sample: Option<SampleConfig>,
    pub cipher: Option<CipherConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HierarchyConfig {
    pub seed: Option<i64>,
    pub bound: Option<i64>,
    pub levels: Option<u32>,
    /// Fixed generator seed. Absent means a fresh seed per run.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SampleConfig {
    pub runs: Option<usize>,
    pub workers: Option<usize>,
}

#[derive(Default, Deserialize)]
pub struct CipherConfig {
    /// Supports `${VAR}` expansion.
    pub key: Option<String>,
}

// Manual Debug impl to keep the cipher key out of logs.
impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key.is_some() {
            "[REDACTED]"
        } else {
            "None"
        };
        f.debug_struct("CipherConfig").field("key", &key).finish()
    }
}

/// Replace `${VAR}` with the variable's value. Unset variables expand to
/// nothing; an unterminated `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        if !name.is_empty() {
            out.push_str(&env::var(name).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl StratumConfig {
    /// Load from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| {
                tracing::warn!("Failed to parse config at {:?}: {}", path, source);
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })
    }

    pub fn parse(content: &str) -> Result<Self, de::Error> {
        toml::from_str(content)
    }

    fn hierarchy(&self) -> Option<&HierarchyConfig> {
        self.hierarchy.as_ref()
    }

    fn sample(&self) -> Option<&SampleConfig> {
        self.sample.as_ref()
    }
}

/// `$STRATUM_CONFIG` if set, else `~/.stratum/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".stratum").join("config.toml"))
}

/// Construction parameters given on the command line. `None` defers to the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyOverrides {
    pub seed: Option<i64>,
    pub bound: Option<i64>,
    pub levels: Option<u32>,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleOverrides {
    pub runs: Option<usize>,
    pub workers: Option<usize>,
}

/// Fully resolved construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHierarchy {
    pub params: Params,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSample {
    pub runs: usize,
    pub workers: usize,
}

pub fn resolve_hierarchy(
    overrides: HierarchyOverrides,
    config: Option<&StratumConfig>,
) -> Result<ResolvedHierarchy, ConfigurationError> {
    let file = config.and_then(StratumConfig::hierarchy);
    let seed = overrides
        .seed
        .or_else(|| file.and_then(|h| h.seed))
        .unwrap_or(DEFAULT_SEED);
    let bound = overrides
        .bound
        .or_else(|| file.and_then(|h| h.bound))
        .unwrap_or(DEFAULT_BOUND);
    let levels = overrides
        .levels
        .or_else(|| file.and_then(|h| h.levels))
        .unwrap_or(DEFAULT_LEVELS);
    let rng_seed = overrides.rng_seed.or_else(|| file.and_then(|h| h.rng_seed));

    Ok(ResolvedHierarchy {
        params: Params::new(seed, bound, levels)?,
        rng_seed,
    })
}

/// Zero values fall through to the next layer rather than producing an empty plan.
#[must_use]
pub fn resolve_sample(overrides: SampleOverrides, config: Option<&StratumConfig>) -> ResolvedSample {
    let file = config.and_then(StratumConfig::sample);
    let runs = overrides
        .runs
        .filter(|&n| n > 0)
        .or_else(|| file.and_then(|s| s.runs).filter(|&n| n > 0))
        .unwrap_or(DEFAULT_RUNS);
    let workers = overrides
        .workers
        .filter(|&n| n > 0)
        .or_else(|| file.and_then(|s| s.workers).filter(|&n| n > 0))
        .unwrap_or_else(default_workers);
    ResolvedSample { runs, workers }
}

fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Flag, then expanded config value, then the demo key.
#[must_use]
pub fn resolve_cipher_key(flag: Option<&str>, config: Option<&StratumConfig>) -> String {
    if let Some(key) = flag {
        return key.to_string();
    }
    config
        .and_then(|c| c.cipher.as_ref())
        .and_then(|c| c.key.as_deref())
        .map(expand_env_vars)
        .unwrap_or_else(|| stratum_cipher::DEMO_KEY.to_string())
}
