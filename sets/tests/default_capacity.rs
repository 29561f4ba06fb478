//! The capacity parameter is resolved once per process: it is forced before any set is created.

use sets::params::DEFAULT_CAPACITY;
use sets::{set, Set};

#[test]
fn new_sets_reserve_default_capacity() {
    // all tests of this file agree on the forced value, whichever runs first
    let _ = DEFAULT_CAPACITY.set(64);
    assert_eq!(DEFAULT_CAPACITY.get(), 64);

    assert!(Set::<u32>::new().capacity() >= 64);
    assert!(Set::<u32>::default().capacity() >= 64);
    let empty: Set<u32> = set![];
    assert!(empty.capacity() >= 64);
}

#[test]
fn sets_built_from_values_ignore_default_capacity() {
    let _ = DEFAULT_CAPACITY.set(64);

    let set = Set::from_values([1u32]);
    assert_eq!(set.len(), 1);
    assert!(set.capacity() < 64);
}
