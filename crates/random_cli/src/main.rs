//! xrandom CLI - command line host for the random_core sampling library
//!
//! Exposes every generator operation and the array utilities as
//! subcommands.
//!
//! # Commands
//!
//! - `xrandom int-between 1 7 --count 10` - ten dice rolls
//! - `xrandom --seed 42 normal --mean 100 --stdev 15` - reproducible sample
//! - `xrandom weighted-pick --items eu,us --weights 3,1` - weighted choice
//! - `xrandom shuffle red green blue` - shuffled copy as a JSON array
//!
//! # Configuration
//!
//! Settings are resolved as: `--seed` flag, then `XRANDOM_SEED` /
//! `XRANDOM_LOG_LEVEL`, then the TOML file given by `--config`, then
//! defaults. `RUST_LOG` takes precedence over the configured log level.

use std::path::Path;

use clap::{Parser, Subcommand};
use random_core::{ModuleConfig, RootModule};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

use commands::sample::{self, Sampler};
pub use error::{CliError, Result};

/// Default configuration file, read only when present
const DEFAULT_CONFIG: &str = "xrandom.toml";

/// Seedable random sampling from the command line
#[derive(Parser)]
#[command(name = "xrandom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Seed for reproducible output (time-derived when omitted)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Number of samples to draw
    #[arg(short = 'n', long, global = true, default_value = "1")]
    count: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Uniform non-negative integer
    Int,

    /// Uniform real number in [0, 1)
    Float,

    /// Fair coin flip
    Boolean,

    /// Uniform integer in [min, max)
    IntBetween {
        /// Inclusive lower bound
        #[arg(allow_negative_numbers = true)]
        min: i64,
        /// Exclusive upper bound
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Uniform real number in [min, max)
    FloatBetween {
        /// Inclusive lower bound
        #[arg(allow_negative_numbers = true)]
        min: f64,
        /// Exclusive upper bound
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Normal distribution
    Normal {
        /// Mean
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mean: f64,
        /// Standard deviation
        #[arg(long, default_value = "1")]
        stdev: f64,
    },

    /// Log-normal distribution (parameters of the underlying normal)
    LogNormal {
        /// Mean of the underlying normal
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mean: f64,
        /// Standard deviation of the underlying normal
        #[arg(long, default_value = "1")]
        stdev: f64,
    },

    /// Bernoulli trial
    Bernoulli {
        /// Success probability in [0, 1]
        probability: f64,
    },

    /// Successes in a number of Bernoulli trials
    Binomial {
        /// Number of trials
        trials: u64,
        /// Success probability in [0, 1]
        probability: f64,
    },

    /// Failures before the first success
    Geometric {
        /// Success probability in (0, 1]
        probability: f64,
    },

    /// Exponential distribution
    Exponential {
        /// Rate, must be positive
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },

    /// Uniform pick from the given items
    Pick {
        /// Items to pick from
        items: Vec<String>,
    },

    /// Pick with probability proportional to weight
    WeightedPick {
        /// Comma separated items
        #[arg(long, value_delimiter = ',')]
        items: Vec<String>,
        /// Comma separated weights, one per item
        #[arg(long)]
        weights: String,
    },

    /// Random permutation of [0, n) as a JSON array
    Permutation {
        /// Length of the permutation
        n: usize,
    },

    /// Shuffled copy of the given items as a JSON array
    Shuffle {
        /// Items to shuffle
        items: Vec<String>,
    },
}

/// Resolve configuration: file, then environment, then flags
fn load_config<F>(cli: &Cli, lookup: F) -> Result<ModuleConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match cli.config.as_deref() {
        Some(path) => ModuleConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => ModuleConfig::load(DEFAULT_CONFIG)?,
        None => ModuleConfig::default(),
    };
    resolve_config(file, lookup, cli.seed)
}

/// Layer environment values and the `--seed` flag over file settings
fn resolve_config<F>(file: ModuleConfig, lookup: F, seed_flag: Option<i64>) -> Result<ModuleConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = file.apply_env(lookup)?;
    if let Some(seed) = seed_flag {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn init_tracing(config: &ModuleConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn to_sampler(command: Commands) -> Result<Sampler> {
    let sampler = match command {
        Commands::Int => Sampler::Int,
        Commands::Float => Sampler::Float,
        Commands::Boolean => Sampler::Boolean,
        Commands::IntBetween { min, max } => Sampler::IntBetween { min, max },
        Commands::FloatBetween { min, max } => Sampler::FloatBetween { min, max },
        Commands::Normal { mean, stdev } => Sampler::Normal { mean, stdev },
        Commands::LogNormal { mean, stdev } => Sampler::LogNormal { mean, stdev },
        Commands::Bernoulli { probability } => Sampler::Bernoulli { probability },
        Commands::Binomial {
            trials,
            probability,
        } => Sampler::Binomial {
            trials,
            probability,
        },
        Commands::Geometric { probability } => Sampler::Geometric { probability },
        Commands::Exponential { rate } => Sampler::Exponential { rate },
        Commands::Pick { items } => Sampler::Pick { items },
        Commands::WeightedPick { items, weights } => Sampler::WeightedPick {
            items,
            weights: sample::parse_weights(&weights)?,
        },
        Commands::Permutation { .. } | Commands::Shuffle { .. } => {
            return Err(CliError::InvalidArgument(
                "array commands do not use a generator".to_string(),
            ))
        }
    };
    Ok(sampler)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli, |key| std::env::var(key).ok())?;
    init_tracing(&config, cli.verbose);

    debug!(?config, "resolved configuration");

    let root = RootModule::new(config);
    let mut instance = root.new_instance();

    let lines = match cli.command {
        Commands::Permutation { n } => vec![commands::arrays::permutation(&mut instance, n)?],
        Commands::Shuffle { items } => vec![commands::arrays::shuffle(&mut instance, &items)?],
        command => {
            let mut rng = instance.random(root.config().seed);
            let sampler = to_sampler(command)?;
            sample::run(&mut rng, &sampler, cli.count)?
        }
    };

    for line in lines {
        println!("{}", line);
    }

    info!("done");
    Ok(())
}
