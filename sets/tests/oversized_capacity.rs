//! A default capacity that cannot be allocated must not prevent building sets.

use sets::params::DEFAULT_CAPACITY;
use sets::{set, Set};

#[test]
fn oversized_default_capacity_is_ignored() {
    let _ = DEFAULT_CAPACITY.set(usize::MAX);
    assert_eq!(DEFAULT_CAPACITY.get(), usize::MAX);

    let mut empty: Set<u8> = Set::new();
    assert!(empty.is_empty());
    assert!(empty.add_if_not_exist(1));
    assert_eq!(empty.len(), 1);

    let default: Set<u8> = Set::default();
    assert!(default.is_empty());
    let from_macro: Set<u8> = set![];
    assert!(from_macro.is_empty());

    assert_eq!(Set::from_values([1u8, 2, 2]).len(), 2);
    let collected: Set<u8> = (0..10).collect();
    assert_eq!(collected.len(), 10);
    assert_eq!(set![1u8, 2].union(&set![3]), set![1, 2, 3]);
}
