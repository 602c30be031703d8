//! Uniform and weighted selection from a slice.

use rand::Rng;
use tracing::warn;

use super::generator::Generator;
use crate::error::{Result, SamplingError};

impl Generator {
    /// Returns a uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when `items` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use random_core::Generator;
    ///
    /// let colours = ["red", "green", "blue"];
    /// let mut rng = Generator::from_seed(9);
    /// let picked = rng.pick(&colours).unwrap();
    /// assert!(colours.contains(picked));
    /// ```
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(SamplingError::invalid_argument(
                "array",
                "cannot pick from an empty collection",
            ));
        }
        let index = self.inner.gen_range(0..items.len());
        Ok(&items[index])
    }

    /// Returns an element of `items` with probability proportional to the
    /// weight at the same position.
    ///
    /// A threshold is drawn uniformly from `[0, total)`; the walk returns the
    /// first element with a non-zero weight whose cumulative weight reaches
    /// the threshold. Zero-weight elements are never selected. Should
    /// rounding carry the walk past the end, the last element with a
    /// non-zero weight is returned.
    ///
    /// # Arguments
    ///
    /// * `items` - Candidates to choose from
    /// * `weights` - Non-negative weight for each element of `items`
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidArgument`] when:
    /// - `items` and `weights` differ in length
    /// - `items` is empty
    /// - a weight is negative or not finite
    /// - all weights are zero
    pub fn weighted_pick<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Result<&'a T> {
        if items.len() != weights.len() {
            return Err(SamplingError::invalid_argument(
                "weights",
                format!(
                    "array and weights must be of the same length, got {} and {}",
                    items.len(),
                    weights.len()
                ),
            ));
        }
        if items.is_empty() {
            return Err(SamplingError::invalid_argument(
                "array",
                "cannot pick from an empty collection",
            ));
        }
        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(SamplingError::invalid_argument(
                "weights",
                format!(
                    "weights must be finite and non-negative, got {} at index {}",
                    weight, index
                ),
            ));
        }

        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(SamplingError::invalid_argument(
                "weights",
                format!("total weight must be positive and finite, got {}", total),
            ));
        }

        let threshold = self.float() * total;

        let mut cumulative = 0.0;
        let mut last_positive = 0;
        for (index, &weight) in weights.iter().enumerate() {
            if weight == 0.0 {
                continue;
            }
            cumulative += weight;
            last_positive = index;
            if cumulative >= threshold {
                return Ok(&items[index]);
            }
        }

        warn!(
            threshold,
            cumulative, "weighted pick walked past the end, returning last weighted element"
        );
        Ok(&items[last_positive])
    }
}
