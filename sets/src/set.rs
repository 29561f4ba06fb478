use crate::params::DEFAULT_CAPACITY;
use crate::{SetError, SetOp};
use hashbrown::HashSet;
use itertools::Itertools;
use std::borrow::Borrow;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// A finite set of unique values, without any particular order.
///
/// Derived sets (union, intersection, difference, clone) never share storage with their operands.
#[derive(Clone)]
pub struct Set<T> {
    members: HashSet<T>,
}

impl<T> Set<T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    /// Removes all elements of the set, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.members.clear()
    }

    /// Iterates over the members in an unspecified order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, T> {
        self.members.iter()
    }

    pub(crate) fn into_members(self) -> HashSet<T> {
        self.members
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set, reserving the capacity given by [`DEFAULT_CAPACITY`].
    ///
    /// A capacity that cannot be allocated is reported as a warning and ignored.
    pub fn new() -> Self {
        let capacity = DEFAULT_CAPACITY.get();
        let mut members = HashSet::new();
        if let Err(err) = members.try_reserve(capacity) {
            tracing::warn!(
                "cannot reserve {} elements from {}: {:?}, starting with an empty table",
                capacity,
                DEFAULT_CAPACITY.name(),
                err
            );
        }
        Set { members }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Set {
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Creates a set with the given values, duplicates being collapsed.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut set = Set {
            members: HashSet::new(),
        };
        set.add(values);
        set
    }

    /// Adds all given values to the set. Values already present are ignored.
    pub fn add(&mut self, values: impl IntoIterator<Item = T>) {
        self.members.extend(values)
    }

    /// Adds the value to the set. Returns true if it was not already present.
    pub fn add_if_not_exist(&mut self, value: T) -> bool {
        self.members.insert(value)
    }

    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(value)
    }

    /// Returns true if all given values are in the set (true if there are none).
    pub fn contains<'a>(&self, values: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        values.into_iter().all(|value| self.has(value))
    }

    /// Removes all given values from the set. Values that are not present are ignored.
    pub fn remove<'a>(&mut self, values: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for value in values {
            self.members.remove(value);
        }
    }

    /// Returns a copy of all members, each exactly once and in an unspecified order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.members.iter().cloned().collect()
    }

    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.has(value))
    }

    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    /// Returns a new set with all elements that appear in either set: `A ∪ B`.
    ///
    /// The operation is commutative: `a.union(&b) == b.union(&a)`.
    pub fn union(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        tracing::trace!("union of sets with {} and {} elements", self.len(), other.len());
        let mut result = self.clone();
        result.add(other.iter().cloned());
        result
    }

    /// Returns a new set with all elements that appear in both sets: `A ∩ B`.
    ///
    /// The operation is commutative: `a.intersect(&b) == b.intersect(&a)`.
    /// Only the smaller set is traversed, with one membership test in the larger set per element.
    pub fn intersect(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        tracing::trace!(
            "intersection: scanning {} elements against {}",
            smaller.len(),
            larger.len()
        );
        // large enough for any result, so that building it never rehashes
        let mut result = Set::with_capacity(smaller.len());
        for value in smaller.iter() {
            if larger.has(value) {
                result.members.insert(value.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of `self` that are not in `other`: `A \ B`.
    ///
    /// The operation is not commutative: `a.difference(&b)` and `b.difference(&a)` generally differ.
    pub fn difference(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        tracing::trace!("difference of sets with {} and {} elements", self.len(), other.len());
        let mut result = Set::with_capacity(self.len());
        for value in self.iter() {
            if !other.has(value) {
                result.members.insert(value.clone());
            }
        }
        result
    }

    /// Same as [`Set::union`] but fails if the second operand is missing.
    pub fn try_union(&self, other: Option<&Set<T>>) -> Result<Set<T>, SetError>
    where
        T: Clone,
    {
        let other = require_operand(other, SetOp::Union)?;
        Ok(self.union(other))
    }

    /// Same as [`Set::intersect`] but fails if the second operand is missing.
    pub fn try_intersect(&self, other: Option<&Set<T>>) -> Result<Set<T>, SetError>
    where
        T: Clone,
    {
        let other = require_operand(other, SetOp::Intersect)?;
        Ok(self.intersect(other))
    }

    /// Same as [`Set::difference`] but fails if the second operand is missing.
    pub fn try_difference(&self, other: Option<&Set<T>>) -> Result<Set<T>, SetError>
    where
        T: Clone,
    {
        let other = require_operand(other, SetOp::Difference)?;
        Ok(self.difference(other))
    }
}

fn require_operand<T>(other: Option<&Set<T>>, op: SetOp) -> Result<&Set<T>, SetError> {
    match other {
        Some(set) => Ok(set),
        None => {
            tracing::debug!("missing second operand for {}", op);
            Err(SetError::MissingOperand(op))
        }
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.members.iter().format(", "))
    }
}
