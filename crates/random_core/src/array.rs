//! Array-level utilities: permutation and shuffling.
//!
//! These functions take the source explicitly. Hosts that want the
//! "no generator argument" form go through
//! [`ModuleInstance`](crate::ModuleInstance), which owns a default source.

use rand::seq::SliceRandom;

use crate::rng::Generator;

/// Returns a uniformly random permutation of the integers `[0, n)`.
///
/// # Arguments
///
/// * `rng` - Source of randomness
/// * `n` - Length of the permutation
///
/// # Examples
///
/// ```rust
/// use random_core::{array, Generator};
///
/// let mut rng = Generator::from_seed(5);
/// let mut perm = array::permutation(&mut rng, 5);
/// perm.sort_unstable();
/// assert_eq!(perm, vec![0, 1, 2, 3, 4]);
/// ```
pub fn permutation(rng: &mut Generator, n: usize) -> Vec<usize> {
    let mut values: Vec<usize> = (0..n).collect();
    shuffle(rng, &mut values);
    values
}

/// Shuffles `items` in place (Fisher–Yates).
pub fn shuffle<T>(rng: &mut Generator, items: &mut [T]) {
    items.shuffle(&mut rng.inner);
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone>(rng: &mut Generator, items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(rng, &mut copy);
    copy
}
