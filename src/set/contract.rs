//! The set contract and its derived operations.

use std::borrow::Borrow;
use std::hash::Hash;

use super::capability::{Iterable, Membership, SameKind};
use crate::hashing::{SET_SEED, element_hash, unordered_hash};

/// An immutable, duplicate-free collection with content-based equality.
///
/// Implementors supply [`Membership`], [`Iterable`] and [`SameKind`]; every
/// method here is derived from those and should not be overridden, except
/// [`can_equal`](Self::can_equal).
///
/// # Equality
///
/// Equality is kind-agnostic: two sets of any kinds are equal when they hold
/// the same elements. A kind may opt out of cross-kind equality through
/// [`can_equal`](Self::can_equal); the guard is checked in both directions,
/// so equality stays symmetric whatever either side decides.
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::{PersistentHashSet, PersistentListSet};
/// use setwise::set::Set;
///
/// let listed: PersistentListSet<i32> = [1, 2, 3].into_iter().collect();
/// let hashed: PersistentHashSet<i32> = [3, 2, 1].into_iter().collect();
///
/// assert!(listed.set_equals(&hashed));
/// assert_eq!(listed.hash_code(), hashed.hash_code());
///
/// let evens: PersistentHashSet<i32> = [2, 4].into_iter().collect();
/// assert!(listed.intersect(&evens).set_equals(&PersistentListSet::singleton(2)));
/// assert_eq!(listed.union(&evens).len(), 4);
/// ```
pub trait Set<T>: Membership<T> + Iterable<T> + SameKind<T> {
    /// Whether `other` may compare equal to `self` at all.
    ///
    /// Defaults to `true`. Overrides must be symmetric across the kinds they
    /// intend to interoperate with.
    fn can_equal<O: Set<T>>(&self, _other: &O) -> bool {
        true
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Stops at the first element that is missing.
    fn subset_of<O>(&self, other: &O) -> bool
    where
        O: Membership<T> + ?Sized,
    {
        self.iter()
            .all(|element| other.contains(Borrow::<T>::borrow(&element)))
    }

    /// Structural equality with any other set.
    ///
    /// `true` when the guards on both sides accept, the sizes match, and
    /// `self` is a subset of `other`.
    ///
    /// Two different kinds can share an address (a kind whose first field is
    /// another set), so the generic form never treats an address match as
    /// identity. The persistent kinds short-circuit in their own `==` when
    /// both sides share storage.
    fn set_equals<O: Set<T>>(&self, other: &O) -> bool {
        self.can_equal(other)
            && other.can_equal(self)
            && self.size() == other.size()
            && self.subset_of(other)
    }

    /// Order-independent hash code, in the [`SET_SEED`] namespace.
    ///
    /// Same as [`hash_code_with`](Self::hash_code_with) given
    /// [`element_hash`].
    fn hash_code(&self) -> u32
    where
        T: Hash,
    {
        self.hash_code_with(element_hash::<T>)
    }

    /// Order-independent hash code over caller-supplied element codes, in
    /// the [`SET_SEED`] namespace.
    ///
    /// `code` must give equal elements equal codes. Every element counts,
    /// including one whose code is 0, so `{x}` never hashes like `{}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentTreeSet;
    /// use setwise::set::Set;
    ///
    /// let words: PersistentTreeSet<String> = ["Ab", "cd"].map(String::from).into_iter().collect();
    /// let shouted: PersistentTreeSet<String> = ["CD", "AB"].map(String::from).into_iter().collect();
    ///
    /// let folded = |word: &String| setwise::hashing::element_hash(&word.to_lowercase());
    /// assert_eq!(words.hash_code_with(folded), shouted.hash_code_with(folded));
    /// ```
    fn hash_code_with<F>(&self, mut code: F) -> u32
    where
        F: FnMut(&T) -> u32,
    {
        let codes = self
            .iter()
            .map(|element| code(Borrow::<T>::borrow(&element)));
        unordered_hash(codes, SET_SEED)
    }

    /// A new set of this kind holding every element of `self` or `other`.
    #[must_use]
    fn union<O>(&self, other: &O) -> Self
    where
        O: Iterable<T> + ?Sized,
        T: Clone,
    {
        self.concat(
            other
                .iter()
                .map(|element| Borrow::<T>::borrow(&element).clone()),
        )
    }

    /// A new set of this kind holding the elements of `self` that are in `other`.
    #[must_use]
    fn intersect<O>(&self, other: &O) -> Self
    where
        O: Membership<T> + ?Sized,
    {
        self.filter(|element| other.contains(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Minimal kind backed by a sorted, deduplicated `Vec`, used to exercise
    /// the derived operations without any shipped kind.
    #[derive(Debug, Clone, PartialEq)]
    struct SortedVecSet(Vec<i32>);

    impl SortedVecSet {
        fn of(elements: &[i32]) -> Self {
            let mut values = elements.to_vec();
            values.sort_unstable();
            values.dedup();
            Self(values)
        }
    }

    impl Membership<i32> for SortedVecSet {
        fn contains(&self, element: &i32) -> bool {
            self.0.binary_search(element).is_ok()
        }
    }

    impl Iterable<i32> for SortedVecSet {
        type Iter<'a> = std::slice::Iter<'a, i32>;

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }
    }

    impl SameKind<i32> for SortedVecSet {
        fn empty(&self) -> Self {
            Self(Vec::new())
        }

        fn filter<P: FnMut(&i32) -> bool>(&self, mut predicate: P) -> Self {
            Self(self.0.iter().copied().filter(|element| predicate(element)).collect())
        }

        fn concat<I: IntoIterator<Item = i32>>(&self, elements: I) -> Self {
            let mut values = self.0.clone();
            values.extend(elements);
            Self::of(&values)
        }
    }

    impl Set<i32> for SortedVecSet {}

    /// Kind that refuses to compare equal to anything of a different size
    /// class, to check that the guard is consulted in both directions.
    struct Guarded(SortedVecSet);

    impl Membership<i32> for Guarded {
        fn contains(&self, element: &i32) -> bool {
            self.0.contains(element)
        }
    }

    impl Iterable<i32> for Guarded {
        type Iter<'a> = std::slice::Iter<'a, i32>;

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }
    }

    impl SameKind<i32> for Guarded {
        fn empty(&self) -> Self {
            Self(self.0.empty())
        }

        fn filter<P: FnMut(&i32) -> bool>(&self, predicate: P) -> Self {
            Self(self.0.filter(predicate))
        }

        fn concat<I: IntoIterator<Item = i32>>(&self, elements: I) -> Self {
            Self(self.0.concat(elements))
        }
    }

    impl Set<i32> for Guarded {
        fn can_equal<O: Set<i32>>(&self, _other: &O) -> bool {
            false
        }
    }

    #[rstest]
    fn test_subset_of() {
        let small = SortedVecSet::of(&[1, 2]);
        let large = SortedVecSet::of(&[1, 2, 3]);
        assert!(small.subset_of(&large));
        assert!(!large.subset_of(&small));
    }

    #[rstest]
    fn test_subset_of_short_circuits() {
        struct CountingMembership(std::cell::Cell<usize>);

        impl Membership<i32> for CountingMembership {
            fn contains(&self, _element: &i32) -> bool {
                self.0.set(self.0.get() + 1);
                false
            }
        }

        let counter = CountingMembership(std::cell::Cell::new(0));
        let set = SortedVecSet::of(&[1, 2, 3, 4]);
        assert!(!set.subset_of(&counter));
        assert_eq!(counter.0.get(), 1);
    }

    #[rstest]
    fn test_set_equals_ignores_construction_order() {
        let forward = SortedVecSet::of(&[1, 2, 3]);
        let backward = SortedVecSet::of(&[3, 2, 1]);
        assert!(forward.set_equals(&backward));
        assert_eq!(forward.hash_code(), backward.hash_code());
    }

    #[rstest]
    fn test_set_equals_requires_same_size() {
        let small = SortedVecSet::of(&[1, 2]);
        let large = SortedVecSet::of(&[1, 2, 3]);
        assert!(!small.set_equals(&large));
        assert!(!large.set_equals(&small));
    }

    #[rstest]
    fn test_set_equals_identity() {
        let set = SortedVecSet::of(&[5]);
        assert!(set.set_equals(&set));
    }

    /// Kind laid out with another set as its first field, so both share an
    /// address while holding different elements.
    #[repr(C)]
    struct WithExtra {
        base: SortedVecSet,
        extra: i32,
    }

    impl WithExtra {
        fn elements(&self) -> SortedVecSet {
            self.base.concat([self.extra])
        }
    }

    impl Membership<i32> for WithExtra {
        fn contains(&self, element: &i32) -> bool {
            *element == self.extra || self.base.contains(element)
        }
    }

    impl Iterable<i32> for WithExtra {
        type Iter<'a> = std::vec::IntoIter<i32>;

        fn iter(&self) -> Self::Iter<'_> {
            self.elements().0.into_iter()
        }
    }

    impl SameKind<i32> for WithExtra {
        fn empty(&self) -> Self {
            Self {
                base: self.base.empty(),
                extra: self.extra,
            }
        }

        fn filter<P: FnMut(&i32) -> bool>(&self, predicate: P) -> Self {
            Self {
                base: self.base.filter(predicate),
                extra: self.extra,
            }
        }

        fn concat<I: IntoIterator<Item = i32>>(&self, elements: I) -> Self {
            Self {
                base: self.base.concat(elements),
                extra: self.extra,
            }
        }
    }

    impl Set<i32> for WithExtra {}

    #[rstest]
    fn test_shared_address_is_not_identity() {
        let outer = WithExtra {
            base: SortedVecSet::of(&[1, 2]),
            extra: 3,
        };
        assert!(std::ptr::addr_eq(
            std::ptr::from_ref(&outer),
            std::ptr::from_ref(&outer.base)
        ));
        assert_eq!(outer.size(), 3);
        assert_eq!(outer.base.size(), 2);
        assert!(!outer.set_equals(&outer.base));
        assert!(!outer.base.set_equals(&outer));
        assert!(outer.set_equals(&SortedVecSet::of(&[3, 2, 1])));
    }

    #[rstest]
    fn test_guard_is_symmetric() {
        let plain = SortedVecSet::of(&[1, 2]);
        let guarded = Guarded(SortedVecSet::of(&[1, 2]));
        assert!(!plain.set_equals(&guarded));
        assert!(!guarded.set_equals(&plain));
    }

    #[rstest]
    fn test_union_and_intersect() {
        let left = SortedVecSet::of(&[1, 2]);
        let right = SortedVecSet::of(&[2, 3]);
        assert_eq!(left.union(&right), SortedVecSet::of(&[1, 2, 3]));
        assert_eq!(left.intersect(&right), SortedVecSet::of(&[2]));
    }

    #[rstest]
    fn test_zero_code_element_hashes_unlike_empty() {
        let zero = |_: &i32| 0_u32;
        let empty = SortedVecSet::of(&[]);
        let single = SortedVecSet::of(&[8]);
        let pair = SortedVecSet::of(&[8, 9]);

        assert_ne!(single.hash_code_with(zero), empty.hash_code_with(zero));
        assert_ne!(pair.hash_code_with(zero), single.hash_code_with(zero));
        assert_eq!(
            single.hash_code_with(zero),
            crate::hashing::unordered_hash([0], SET_SEED)
        );
    }

    #[rstest]
    fn test_hash_code_is_hash_code_with_element_hash() {
        let set = SortedVecSet::of(&[-3, 0, 12]);
        assert_eq!(set.hash_code(), set.hash_code_with(element_hash));
    }

    #[rstest]
    fn test_empty_hash_is_seed_only() {
        let empty = SortedVecSet::of(&[]);
        assert_eq!(
            empty.hash_code(),
            crate::hashing::unordered_hash(std::iter::empty(), SET_SEED)
        );
        assert!(empty.set_equals(&SortedVecSet::of(&[4]).empty()));
    }
}
