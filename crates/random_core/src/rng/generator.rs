//! Seedable generator and its uniform primitives.
//!
//! [`Generator`] wraps `rand::rngs::StdRng` and records the seed it was
//! initialised with. Derived distributions and selection helpers live in
//! sibling modules as further `impl Generator` blocks.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, SamplingError};

/// Seedable pseudo-random generator.
///
/// Two generators created with the same seed produce identical outputs for
/// identical call sequences. Reproducibility holds for the same underlying
/// algorithm only (`StdRng` of the pinned `rand` release); it is not a
/// guarantee across implementations.
///
/// A generator is not synchronised. Every sampling method takes `&mut self`,
/// so callers sharing one instance across threads must serialise access,
/// e.g. through `Arc<Mutex<Generator>>`.
///
/// # Examples
///
/// ```rust
/// use random_core::Generator;
///
/// let mut a = Generator::from_seed(7);
/// let mut b = Generator::from_seed(7);
///
/// assert_eq!(a.seed(), 7);
/// assert_eq!(a.int_between(0, 100).unwrap(), b.int_between(0, 100).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    /// The underlying PRNG instance.
    pub(crate) inner: StdRng,
    /// Seed used for initialisation.
    seed: i64,
}

impl Generator {
    /// Attribute names a host exposes on a generator object, in export order.
    pub const METHODS: [&'static str; 14] = [
        "seed",
        "int",
        "float",
        "boolean",
        "intBetween",
        "floatBetween",
        "pick",
        "weightedPick",
        "normal",
        "logNormal",
        "bernoulli",
        "binomial",
        "geometric",
        "exponential",
    ];

    /// Creates a generator seeded from the current time in nanoseconds.
    ///
    /// Two calls within the same clock tick may yield the same seed.
    pub fn new() -> Self {
        Self::from_seed(time_seed())
    }

    /// Creates a generator initialised with the given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed; its bit pattern seeds the underlying `StdRng`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use random_core::Generator;
    ///
    /// let rng = Generator::from_seed(-3);
    /// assert_eq!(rng.seed(), -3);
    /// ```
    pub fn from_seed(seed: i64) -> Self {
        debug!(seed, "initialising generator");
        Self {
            inner: StdRng::seed_from_u64(seed as u64),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Returns a uniform integer over `[0, i64::MAX]`.
    #[inline]
    pub fn int(&mut self) -> i64 {
        self.inner.gen_range(0..=i64::MAX)
    }

    /// Returns a uniform real number in `[0.0, 1.0)`.
    #[inline]
    pub fn float(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Returns `true` or `false` with equal probability.
    #[inline]
    pub fn boolean(&mut self) -> bool {
        self.inner.gen_range(0..2) == 1
    }

    /// Returns a uniform integer in `[min, max)`.
    ///
    /// The full `i64` span is supported, e.g. `int_between(i64::MIN, i64::MAX)`.
    ///
    /// # Arguments
    ///
    /// * `min` - Inclusive lower bound
    /// * `max` - Exclusive upper bound
    ///
    /// # Errors
    ///
    /// [`SamplingError::Range`] when `max <= min`.
    pub fn int_between(&mut self, min: i64, max: i64) -> Result<i64> {
        if max <= min {
            return Err(SamplingError::range(min, max));
        }
        Ok(self.inner.gen_range(min..max))
    }

    /// Returns a uniform real number in `[min, max)`.
    ///
    /// `max` is never returned, even for ranges only a few ulps wide where
    /// scaling a unit draw would round up to the upper bound.
    ///
    /// # Arguments
    ///
    /// * `min` - Inclusive lower bound
    /// * `max` - Exclusive upper bound
    ///
    /// # Errors
    ///
    /// [`SamplingError::Range`] when `max <= min`, when either bound is not
    /// finite, or when the width of the range overflows `f64`.
    pub fn float_between(&mut self, min: f64, max: f64) -> Result<f64> {
        if min.is_nan() || max.is_nan() || max <= min || !(max - min).is_finite() {
            return Err(SamplingError::range(min, max));
        }
        Ok(self.inner.gen_range(min..max))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nanosecond wall clock reading used as a default seed.
///
/// Nanoseconds since the epoch overflow `i64` after the year 2262; from
/// then on the seed is the timestamp in microseconds instead.
pub(crate) fn time_seed() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_accessor() {
        assert_eq!(Generator::from_seed(42).seed(), 42);
        assert_eq!(Generator::from_seed(i64::MIN).seed(), i64::MIN);
    }

    #[test]
    fn test_time_seeded_generators_differ_over_time() {
        let first = Generator::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = Generator::new();
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_int_is_non_negative() {
        let mut rng = Generator::from_seed(1);
        for _ in 0..10_000 {
            assert!(rng.int() >= 0);
        }
    }

    #[test]
    fn test_int_between_bounds() {
        let mut rng = Generator::from_seed(2);
        for _ in 0..10_000 {
            let value = rng.int_between(-5, 5).unwrap();
            assert!((-5..5).contains(&value), "{} outside [-5, 5)", value);
        }
    }

    #[test]
    fn test_int_between_unit_range() {
        let mut rng = Generator::from_seed(3);
        for _ in 0..100 {
            assert_eq!(rng.int_between(9, 10).unwrap(), 9);
        }
    }

    #[test]
    fn test_int_between_full_span() {
        let mut rng = Generator::from_seed(4);
        for _ in 0..1_000 {
            assert!(rng.int_between(i64::MIN, i64::MAX).unwrap() < i64::MAX);
        }
    }

    #[test]
    fn test_int_between_rejects_degenerate_range() {
        let mut rng = Generator::from_seed(5);
        assert_eq!(
            rng.int_between(3, 3),
            Err(SamplingError::range(3, 3))
        );
        assert!(rng.int_between(4, 3).unwrap_err().is_range());
    }

    #[test]
    fn test_float_between_bounds() {
        let mut rng = Generator::from_seed(6);
        for _ in 0..10_000 {
            let value = rng.float_between(-2.5, 7.5).unwrap();
            assert!((-2.5..7.5).contains(&value), "{} outside [-2.5, 7.5)", value);
        }
    }

    #[test]
    fn test_time_seed_is_in_nanoseconds() {
        let before = Utc::now().timestamp_nanos_opt().unwrap();
        let seed = time_seed();
        let after = Utc::now().timestamp_nanos_opt().unwrap();
        assert!(before <= seed && seed <= after);
    }

    #[test]
    fn test_float_between_one_ulp_range_excludes_max() {
        let mut rng = Generator::from_seed(8);
        let min = 1.0_f64;
        let max = f64::from_bits(min.to_bits() + 1);

        for _ in 0..10_000 {
            assert_eq!(rng.float_between(min, max).unwrap(), min);
        }
    }

    #[test]
    fn test_float_between_narrow_negative_range_excludes_max() {
        let mut rng = Generator::from_seed(9);
        let max = -3.0_f64;
        let min = f64::from_bits(max.to_bits() + 2);

        for _ in 0..10_000 {
            let value = rng.float_between(min, max).unwrap();
            assert!(value >= min && value < max, "{} outside [{}, {})", value, min, max);
        }
    }

    #[test]
    fn test_float_between_rejects_invalid_bounds() {
        let mut rng = Generator::from_seed(7);
        assert!(rng.float_between(1.0, 1.0).unwrap_err().is_range());
        assert!(rng.float_between(2.0, 1.0).unwrap_err().is_range());
        assert!(rng.float_between(f64::NAN, 1.0).unwrap_err().is_range());
        assert!(rng.float_between(0.0, f64::INFINITY).unwrap_err().is_range());
        assert!(rng.float_between(-f64::MAX, f64::MAX).unwrap_err().is_range());
    }
}
