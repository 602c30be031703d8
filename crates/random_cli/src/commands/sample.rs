//! Generator sampling commands
//!
//! Draws `count` samples from a single generator, one per output line.

use random_core::Generator;
use tracing::info;

use crate::{CliError, Result};

/// A generator operation selected on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    /// Uniform non-negative integer
    Int,
    /// Uniform real in [0, 1)
    Float,
    /// Fair coin
    Boolean,
    /// Uniform integer in [min, max)
    IntBetween { min: i64, max: i64 },
    /// Uniform real in [min, max)
    FloatBetween { min: f64, max: f64 },
    /// Normal distribution
    Normal { mean: f64, stdev: f64 },
    /// Log-normal distribution
    LogNormal { mean: f64, stdev: f64 },
    /// Bernoulli trial
    Bernoulli { probability: f64 },
    /// Binomial distribution
    Binomial { trials: u64, probability: f64 },
    /// Geometric distribution
    Geometric { probability: f64 },
    /// Exponential distribution
    Exponential { rate: f64 },
    /// Uniform pick from items
    Pick { items: Vec<String> },
    /// Weighted pick from items
    WeightedPick { items: Vec<String>, weights: Vec<f64> },
}

impl Sampler {
    /// Draw a single sample rendered as text
    fn draw(&self, rng: &mut Generator) -> Result<String> {
        let value = match self {
            Sampler::Int => rng.int().to_string(),
            Sampler::Float => rng.float().to_string(),
            Sampler::Boolean => rng.boolean().to_string(),
            Sampler::IntBetween { min, max } => rng.int_between(*min, *max)?.to_string(),
            Sampler::FloatBetween { min, max } => rng.float_between(*min, *max)?.to_string(),
            Sampler::Normal { mean, stdev } => rng.normal(*mean, *stdev)?.to_string(),
            Sampler::LogNormal { mean, stdev } => rng.log_normal(*mean, *stdev)?.to_string(),
            Sampler::Bernoulli { probability } => rng.bernoulli(*probability)?.to_string(),
            Sampler::Binomial {
                trials,
                probability,
            } => rng.binomial(*trials, *probability)?.to_string(),
            Sampler::Geometric { probability } => rng.geometric(*probability)?.to_string(),
            Sampler::Exponential { rate } => rng.exponential(*rate)?.to_string(),
            Sampler::Pick { items } => rng.pick(items)?.clone(),
            Sampler::WeightedPick { items, weights } => rng.weighted_pick(items, weights)?.clone(),
        };
        Ok(value)
    }
}

/// Run a sampling command
pub fn run(rng: &mut Generator, sampler: &Sampler, count: usize) -> Result<Vec<String>> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    info!(seed = rng.seed(), count, "sampling {:?}", sampler);

    (0..count).map(|_| sampler.draw(rng)).collect()
}

/// Parse a comma separated list of weights
pub fn parse_weights(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(|w| {
            w.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidArgument(format!("Invalid weight: '{}'", w.trim())))
        })
        .collect()
}
