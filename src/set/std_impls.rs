//! Capability implementations for the standard library's sets.
//!
//! Standard sets are not immutable values, so they do not implement
//! [`Set`](super::Set) or [`SameKind`](super::SameKind); they can still be
//! the `other` operand of `subset_of`, `union` and `intersect`.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::capability::{Iterable, Membership};

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Iterable<T> for HashSet<T, S> {
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }
}

impl<T: Ord> Iterable<T> for BTreeSet<T> {
    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_std_hash_set_membership() {
        let set: HashSet<i32> = [1, 2].into_iter().collect();
        assert!(Membership::contains(&set, &1));
        assert!(!Membership::contains(&set, &3));
        assert_eq!(Iterable::size(&set), 2);
    }

    #[rstest]
    fn test_std_btree_set_iterates_every_element() {
        let set: BTreeSet<char> = ['b', 'a'].into_iter().collect();
        let collected: Vec<&char> = Iterable::iter(&set).collect();
        assert_eq!(collected, vec![&'a', &'b']);
    }
}
