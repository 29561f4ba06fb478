use crate::Set;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Sub};

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::from_values(iter)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter)
    }
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied())
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        Set::from_values(values)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Set::from_values(values)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hashbrown::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_members().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `&a | &b` is the union of `a` and `b`.
impl<T: Eq + Hash + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

/// `&a & &b` is the intersection of `a` and `b`.
impl<T: Eq + Hash + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersect(rhs)
    }
}

/// `&a - &b` is the difference of `a` and `b`.
impl<T: Eq + Hash + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{set, Set};

    #[test]
    fn test_operators() {
        let a = set![1, 2, 3];
        let b = set![3, 4, 5];
        assert_eq!(&a | &b, set![1, 2, 3, 4, 5]);
        assert_eq!(&a & &b, set![3]);
        assert_eq!(&a - &b, set![1, 2]);
        assert_eq!(&b - &a, set![4, 5]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut set: Set<u32> = (0..5).chain(0..5).collect();
        assert_eq!(set.len(), 5);

        set.extend(vec![5, 6]);
        set.extend(&[6, 7]);
        assert_eq!(set, Set::from_values(0..8));

        assert_eq!(Set::from([1, 1, 2]), set![1, 2]);
        assert_eq!(Set::from(vec!["a", "a"]).len(), 1);
    }

    #[test]
    fn test_into_iter() {
        let set = set![1, 2, 3];
        let mut borrowed: Vec<i32> = (&set).into_iter().copied().collect();
        borrowed.sort();
        assert_eq!(borrowed, vec![1, 2, 3]);

        let mut total = 0;
        for value in &set {
            total += value;
        }
        assert_eq!(total, 6);

        let mut owned: Vec<i32> = set.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec![1, 2, 3]);
    }
}
