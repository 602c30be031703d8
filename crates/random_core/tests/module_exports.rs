//! Integration tests for the public API as a host would drive it.
//!
//! Mirrors a script that constructs `Random([seed])` and calls the free
//! functions `permutation`, `shuffle` and `shuffled`.

use random_core::{array, Generator, ModuleConfig, ModuleInstance, RootModule, SamplingError};
use std::sync::{Arc, Mutex};

#[test]
fn test_permutation_of_five() {
    let root = RootModule::new(ModuleConfig::new().with_seed(3));
    let mut vu = root.new_instance();

    let mut perm = vu.permutation(5);
    assert_eq!(perm.len(), 5);
    perm.sort_unstable();
    assert_eq!(perm, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_shuffle_mutates_through_caller_reference() {
    let mut vu = ModuleInstance::with_default_source(Generator::from_seed(10));
    let original = vec![1, 2, 3, 4, 5];

    let mut reordered = false;
    for _ in 0..10 {
        let mut values = original.clone();
        vu.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
        reordered |= values != original;
    }
    assert!(reordered);
}

#[test]
fn test_shuffled_returns_new_sequence() {
    let mut vu = ModuleInstance::with_default_source(Generator::from_seed(11));
    let colours = vec!["red", "green", "blue", "yellow"];

    let result = vu.shuffled(&colours);
    assert_eq!(colours, vec!["red", "green", "blue", "yellow"]);

    let mut a = result.clone();
    let mut b = colours.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn test_injected_source_matches_free_functions() {
    let mut vu = ModuleInstance::with_default_source(Generator::from_seed(12));
    let mut rng = Generator::from_seed(12);

    assert_eq!(vu.permutation(16), array::permutation(&mut rng, 16));
    assert_eq!(
        vu.shuffled(&['a', 'b', 'c']),
        array::shuffled(&mut rng, &['a', 'b', 'c'])
    );
}

#[test]
fn test_instances_do_not_share_default_source() {
    let root = RootModule::new(ModuleConfig::new().with_seed(20));
    let mut vu1 = root.new_instance();
    let mut vu2 = root.new_instance();

    // drawing from vu1 must not move vu2's stream
    let _ = vu1.permutation(100);
    let mut reference = ModuleInstance::with_default_source(Generator::from_seed(21));
    assert_eq!(vu2.permutation(30), reference.permutation(30));
}

#[test]
fn test_random_constructor_seeded_and_unseeded() {
    let vu = RootModule::default().new_instance();

    let seeded = vu.random(Some(-99));
    assert_eq!(seeded.seed(), -99);

    // time-derived seeds are still observable
    let unseeded = vu.random(None);
    let mut replay = Generator::from_seed(unseeded.seed());
    let mut unseeded = unseeded;
    assert_eq!(unseeded.int(), replay.int());
}

#[test]
fn test_error_taxonomy() {
    let mut rng = Generator::from_seed(0);
    let empty: Vec<&str> = Vec::new();

    assert!(matches!(
        rng.int_between(10, 1),
        Err(SamplingError::Range { .. })
    ));
    assert!(matches!(
        rng.exponential(-1.0),
        Err(SamplingError::InvalidArgument { name: "rate", .. })
    ));
    assert!(matches!(
        rng.pick(&empty),
        Err(SamplingError::InvalidArgument { name: "array", .. })
    ));
    assert!(matches!(
        rng.weighted_pick(&["a"], &[1.0, 2.0]),
        Err(SamplingError::InvalidArgument { name: "weights", .. })
    ));
    assert!(matches!(
        rng.geometric(0.0),
        Err(SamplingError::InvalidArgument { name: "probability", .. })
    ));
}

#[test]
fn test_generator_shared_behind_mutex() {
    let shared = Arc::new(Mutex::new(Generator::from_seed(55)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                let mut total = 0u64;
                for _ in 0..1_000 {
                    let mut rng = shared.lock().unwrap();
                    total += rng.binomial(4, 0.5).unwrap();
                }
                total
            })
        })
        .collect();

    let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    // 4 threads × 1000 draws × mean 2
    assert!((7_000..9_000).contains(&total), "total {}", total);
}
