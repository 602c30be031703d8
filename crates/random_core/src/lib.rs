//! # random_core: Seedable Sampling Utilities
//!
//! random_core provides a seedable pseudo-random [`Generator`] with a set of
//! sampling algorithms, plus array utilities for permutation and shuffling.
//!
//! - Uniform primitives: `int`, `float`, `boolean`, `int_between`, `float_between`
//! - Distributions: `normal`, `log_normal`, `bernoulli`, `binomial`,
//!   `geometric`, `exponential`
//! - Selection: `pick`, `weighted_pick`
//! - Array utilities: [`array::permutation`], [`array::shuffle`], [`array::shuffled`]
//! - Host boundary: [`RootModule`] and [`ModuleInstance`]
//!
//! The generator wraps `rand::rngs::StdRng`. It is not cryptographically
//! secure.
//!
//! ## Usage Examples
//!
//! ```rust
//! use random_core::{Generator, SamplingError};
//!
//! let mut rng = Generator::from_seed(2024);
//!
//! let roll = rng.int_between(1, 7)?;
//! assert!((1..7).contains(&roll));
//!
//! let latency_ms = rng.log_normal(3.0, 0.25)?;
//! assert!(latency_ms > 0.0);
//!
//! assert!(rng.exponential(0.0).is_err());
//! # Ok::<(), SamplingError>(())
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`SamplingError`]. Arguments are checked
//! before any draw, so a failed call never advances the generator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod config;
pub mod error;
pub mod module;
pub mod rng;

pub use config::{ConfigError, LogLevel, ModuleConfig};
pub use error::{Result, SamplingError};
pub use module::{ModuleInstance, RootModule, MODULE_NAME};
pub use rng::Generator;
