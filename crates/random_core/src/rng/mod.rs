//! # Generator and Sampling Algorithms
//!
//! This module provides [`Generator`], a seedable pseudo-random source, and
//! the sampling algorithms built on top of it.
//!
//! ## Module Structure
//!
//! - [`generator`]: construction, seed tracking and uniform primitives
//! - `distributions`: normal, log-normal, Bernoulli, binomial, geometric,
//!   exponential
//! - `selection`: uniform and weighted picking from a slice
//!
//! ## Usage Example
//!
//! ```rust
//! use random_core::Generator;
//!
//! let mut rng = Generator::from_seed(12345);
//!
//! let u = rng.float();
//! assert!((0.0..1.0).contains(&u));
//!
//! let waiting = rng.exponential(2.0).unwrap();
//! assert!(waiting >= 0.0);
//!
//! let server = rng.weighted_pick(&["eu", "us"], &[3.0, 1.0]).unwrap();
//! assert!(["eu", "us"].contains(server));
//! ```
//!
//! ## Reproducibility
//!
//! Every method advances the stream only after its arguments are accepted,
//! so interleaving failed calls does not change the values that follow.

pub mod generator;
mod distributions;
mod selection;

pub use generator::Generator;
