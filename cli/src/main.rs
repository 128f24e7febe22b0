//! Stratum CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> Cli::parse() -> load_config()
//!                                                  |
//!                        build | sample | cipher <-+
//! ```
//!
//! Program output goes to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

mod commands;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stratum_config::{HierarchyOverrides, SampleOverrides, StratumConfig};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("warn filter is valid");

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[derive(Parser)]
#[command(name = "stratum")]
#[command(about = "Build stochastic integer hierarchies and run the XOR cipher demo")]
#[command(version)]
struct Cli {
    /// Config file (default: $STRATUM_CONFIG or ~/.stratum/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The requested subcommand, or `build` with no overrides.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Build {
            hierarchy: HierarchyArgs::default(),
            trace: false,
            json: false,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build one sequence and verify it (default)
    Build {
        #[command(flatten)]
        hierarchy: HierarchyArgs,
        /// Print one line per attempted level
        #[arg(long)]
        trace: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build many independent sequences in parallel and summarize them
    Sample {
        #[command(flatten)]
        hierarchy: HierarchyArgs,
        /// Number of independent runs
        #[arg(long)]
        runs: Option<usize>,
        /// Blocking worker tasks
        #[arg(long)]
        workers: Option<usize>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Encrypt and decrypt a text with a repeating XOR key
    Cipher {
        /// Cipher key (default: config value, then the demo key)
        #[arg(long)]
        key: Option<String>,
        /// Plaintext (default: the demo sentence)
        text: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone, Copy)]
struct HierarchyArgs {
    /// First element of the sequence
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Modulus for admission and verification
    #[arg(long, allow_negative_numbers = true)]
    bound: Option<i64>,
    /// Maximum sequence length
    #[arg(long)]
    levels: Option<u32>,
    /// Generator seed; a fresh one is drawn and reported when absent
    #[arg(long)]
    rng_seed: Option<u64>,
}

impl From<HierarchyArgs> for HierarchyOverrides {
    fn from(args: HierarchyArgs) -> Self {
        Self {
            seed: args.seed,
            bound: args.bound,
            levels: args.levels,
            rng_seed: args.rng_seed,
        }
    }
}

/// An explicit path must exist; the default location may be absent.
fn load_config(explicit: Option<&Path>) -> Result<Option<StratumConfig>> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            Ok(StratumConfig::load_from(path)?)
        }
        None => Ok(StratumConfig::load()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let command = cli.into_command();

    let mut out = io::stdout().lock();
    match command {
        Commands::Build {
            hierarchy,
            trace,
            json,
        } => {
            let options = commands::BuildOptions { trace, json };
            commands::run_build(&mut out, hierarchy.into(), config.as_ref(), options)?;
        }
        Commands::Sample {
            hierarchy,
            runs,
            workers,
            json,
        } => {
            let overrides = SampleOverrides { runs, workers };
            commands::run_sample(&mut out, hierarchy.into(), overrides, config.as_ref(), json)
                .await?;
        }
        Commands::Cipher { key, text } => {
            commands::run_cipher(&mut out, key.as_deref(), text.as_deref(), config.as_ref())?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
