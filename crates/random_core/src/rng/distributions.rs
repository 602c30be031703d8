//! Derived distributions built on the uniform primitives.
//!
//! Parameters are validated before any draw so that a rejected call leaves
//! the stream position unchanged.

use rand_distr::{Distribution, StandardNormal};

use super::generator::Generator;
use crate::error::{Result, SamplingError};

impl Generator {
    /// Returns a sample from a normal distribution with the given mean and
    /// standard deviation.
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`, scaled by
    /// `stdev` and shifted by `mean`.
    ///
    /// # Arguments
    ///
    /// * `mean` - Mean of the distribution
    /// * `stdev` - Standard deviation, finite and non-negative
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `mean` is not finite or `stdev`
    /// is negative or not finite.
    pub fn normal(&mut self, mean: f64, stdev: f64) -> Result<f64> {
        check_normal_params(mean, stdev)?;
        let z: f64 = StandardNormal.sample(&mut self.inner);
        Ok(z * stdev + mean)
    }

    /// Returns `exp(normal(mean, stdev))`.
    ///
    /// `mean` and `stdev` parameterise the underlying normal distribution,
    /// not the resulting log-normal one.
    ///
    /// # Arguments
    ///
    /// * `mean` - Mean of the underlying normal
    /// * `stdev` - Standard deviation of the underlying normal
    ///
    /// # Errors
    ///
    /// Same conditions as [`Generator::normal`].
    pub fn log_normal(&mut self, mean: f64, stdev: f64) -> Result<f64> {
        Ok(self.normal(mean, stdev)?.exp())
    }

    /// Returns `true` with the given probability.
    ///
    /// # Arguments
    ///
    /// * `probability` - Success probability in `[0, 1]`
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `probability` is outside `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use random_core::Generator;
    ///
    /// let mut rng = Generator::from_seed(1);
    /// assert!(!rng.bernoulli(0.0).unwrap());
    /// assert!(rng.bernoulli(1.0).unwrap());
    /// ```
    pub fn bernoulli(&mut self, probability: f64) -> Result<bool> {
        check_probability(probability)?;
        Ok(self.bernoulli_trial(probability))
    }

    /// Returns the number of successes in `trials` independent Bernoulli draws.
    ///
    /// Runs in O(`trials`).
    ///
    /// # Arguments
    ///
    /// * `trials` - Number of independent trials
    /// * `probability` - Success probability of each trial, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `probability` is outside `[0, 1]`.
    pub fn binomial(&mut self, trials: u64, probability: f64) -> Result<u64> {
        check_probability(probability)?;
        let mut count = 0;
        for _ in 0..trials {
            if self.bernoulli_trial(probability) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Returns the number of failures before the first success of repeated
    /// Bernoulli trials with the given success probability.
    ///
    /// # Arguments
    ///
    /// * `probability` - Success probability of each trial, in `(0, 1]`
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `probability` is outside
    /// `(0, 1]`. A zero probability would never terminate.
    pub fn geometric(&mut self, probability: f64) -> Result<u64> {
        if probability.is_nan() || probability <= 0.0 || probability > 1.0 {
            return Err(SamplingError::invalid_argument(
                "probability",
                format!("must be in (0, 1], got {}", probability),
            ));
        }

        let mut failures = 0;
        while !self.bernoulli_trial(probability) {
            failures += 1;
        }
        Ok(failures)
    }

    /// Returns a sample from an exponential distribution with the given rate.
    ///
    /// Computed as `-ln(U) / rate` with `U` uniform on `(0, 1]`, so the
    /// result is always finite.
    ///
    /// # Arguments
    ///
    /// * `rate` - Rate parameter (inverse of the mean), strictly positive
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `rate` is not strictly positive.
    pub fn exponential(&mut self, rate: f64) -> Result<f64> {
        if rate.is_nan() || rate <= 0.0 {
            return Err(SamplingError::invalid_argument(
                "rate",
                format!("must be positive, got {}", rate),
            ));
        }
        let u = 1.0 - self.float();
        Ok(-u.ln() / rate)
    }

    /// Single unchecked trial: a uniform draw below `probability`.
    #[inline]
    fn bernoulli_trial(&mut self, probability: f64) -> bool {
        self.float() < probability
    }
}

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(SamplingError::invalid_argument(
            "probability",
            format!("must be in [0, 1], got {}", probability),
        ))
    }
}

fn check_normal_params(mean: f64, stdev: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(SamplingError::invalid_argument(
            "mean",
            format!("must be finite, got {}", mean),
        ));
    }
    if !stdev.is_finite() || stdev < 0.0 {
        return Err(SamplingError::invalid_argument(
            "stdev",
            format!("must be finite and non-negative, got {}", stdev),
        ));
    }
    Ok(())
}
