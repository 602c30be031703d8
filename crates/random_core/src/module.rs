//! Host-facing module: the root module and per-context instances.
//!
//! A host creates one [`RootModule`] per process and one [`ModuleInstance`]
//! per execution context (a virtual user or worker). Each instance owns its
//! own default source, so the array utilities never touch hidden global
//! state and instances never share mutable state.
//!
//! Marshalling values in and out of a scripting runtime, registering the
//! module and enforcing read-only attributes are left to the host.
//!
//! # Example
//!
//! ```rust
//! use random_core::{ModuleConfig, RootModule};
//!
//! let root = RootModule::new(ModuleConfig::new().with_seed(1));
//! let mut vu = root.new_instance();
//!
//! let mut colours = vec!["red", "green", "blue"];
//! vu.shuffle(&mut colours);
//!
//! let mut rng = vu.random(Some(42));
//! assert_eq!(rng.seed(), 42);
//! assert!(colours.contains(rng.pick(&colours).unwrap()));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::array;
use crate::config::ModuleConfig;
use crate::rng::Generator;

/// Namespace under which hosts register the module.
pub const MODULE_NAME: &str = "k6/x/random";

/// Process-wide module root.
///
/// Holds configuration and hands out independent [`ModuleInstance`]s.
/// The root itself is `Send + Sync`; instances are meant to stay within
/// their execution context.
#[derive(Debug, Default)]
pub struct RootModule {
    /// Configuration shared by every instance.
    config: ModuleConfig,
    /// Number of instances created so far.
    instance_count: AtomicU64,
}

impl RootModule {
    /// Creates a root module with the given configuration.
    pub fn new(config: ModuleConfig) -> Self {
        Self {
            config,
            instance_count: AtomicU64::new(0),
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Returns the number of instances created so far.
    #[inline]
    pub fn instance_count(&self) -> u64 {
        self.instance_count.load(Ordering::Relaxed)
    }

    /// Creates the module instance for a new execution context.
    ///
    /// With a configured seed, instance `n` (counting from zero) gets a
    /// default source seeded with `seed + n`, so every context is
    /// reproducible yet distinct. Without one, the seed is time-derived.
    pub fn new_instance(&self) -> ModuleInstance {
        let id = self.instance_count.fetch_add(1, Ordering::Relaxed);
        let default_source = match self.config.seed {
            Some(seed) => Generator::from_seed(seed.wrapping_add(id as i64)),
            None => Generator::new(),
        };
        debug!(
            instance = id,
            seed = default_source.seed(),
            "created module instance"
        );
        ModuleInstance { id, default_source }
    }
}

/// Module state for one execution context.
///
/// Exposes the constructor and free functions a host registers under
/// [`MODULE_NAME`], see [`ModuleInstance::EXPORTS`].
#[derive(Debug)]
pub struct ModuleInstance {
    /// Creation index within the root module.
    id: u64,
    /// Source behind `permutation`, `shuffle` and `shuffled`.
    default_source: Generator,
}

impl ModuleInstance {
    /// Names a host registers for this module, in export order.
    pub const EXPORTS: [&'static str; 4] = ["Random", "permutation", "shuffle", "shuffled"];

    /// Creates an instance around an explicit default source.
    ///
    /// Useful for tests that inject a seeded source directly.
    pub fn with_default_source(default_source: Generator) -> Self {
        Self {
            id: 0,
            default_source,
        }
    }

    /// Returns the creation index within the root module.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the seed of the default source.
    #[inline]
    pub fn default_seed(&self) -> i64 {
        self.default_source.seed()
    }

    /// `Random([seed])`: a seeded generator, or a time-seeded one if `seed`
    /// is `None`.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional seed for the new generator
    pub fn random(&self, seed: Option<i64>) -> Generator {
        match seed {
            Some(seed) => Generator::from_seed(seed),
            None => Generator::new(),
        }
    }

    /// Random permutation of `[0, n)` drawn from the default source.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        array::permutation(&mut self.default_source, n)
    }

    /// Shuffles `items` in place using the default source.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        array::shuffle(&mut self.default_source, items)
    }

    /// Shuffled copy of `items` drawn from the default source.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        array::shuffled(&mut self.default_source, items)
    }
}
