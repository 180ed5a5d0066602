//! Persistent (immutable) sorted set.
//!
//! This module provides [`PersistentTreeSet`], a set backed by a shared
//! B-tree. Elements are always visited in ascending order, which also makes
//! `Display` output deterministic.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentTreeSet;
//!
//! let set: PersistentTreeSet<i32> = [3, 1, 2].into_iter().collect();
//!
//! assert_eq!(set.first(), Some(&1));
//! assert_eq!(set.last(), Some(&3));
//! assert_eq!(format!("{set}"), "{1, 2, 3}");
//!
//! let middle: Vec<&i32> = set.range(2..).collect();
//! assert_eq!(middle, vec![&2, &3]);
//! ```

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, RangeBounds};

use super::ReferenceCounter;
use crate::set::{Iterable, Membership, SameKind, Set};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// PersistentTreeSet Definition
// =============================================================================

/// A persistent (immutable) sorted set.
///
/// # Time Complexity
///
/// | Operation      | Complexity   |
/// |----------------|--------------|
/// | `new`          | O(1)         |
/// | `contains`     | O(log n)     |
/// | `insert`       | O(n)         |
/// | `remove`       | O(n)         |
/// | `first`/`last` | O(log n)     |
/// | `range`        | O(log n + k) |
/// | `len`          | O(1)         |
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::PersistentTreeSet;
///
/// let set = PersistentTreeSet::new().insert("b").insert("a");
/// let elements: Vec<&&str> = set.iter().collect();
/// assert_eq!(elements, vec![&"a", &"b"]);
/// ```
pub struct PersistentTreeSet<T> {
    tree: ReferenceCounter<BTreeSet<T>>,
}

impl<T> PersistentTreeSet<T> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: ReferenceCounter::new(BTreeSet::new()),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> PersistentTreeSetIterator<'_, T> {
        PersistentTreeSetIterator {
            inner: self.tree.iter(),
        }
    }

    fn from_tree(tree: BTreeSet<T>) -> Self {
        Self {
            tree: ReferenceCounter::new(tree),
        }
    }
}

impl<T: Ord> PersistentTreeSet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// the ordering on the borrowed form must match the ordering on the
    /// element type.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(element)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns an iterator over the elements within `range`, in ascending
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if start and
    /// end are equal and both excluded, as [`BTreeSet::range`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentTreeSet;
    ///
    /// let set: PersistentTreeSet<i32> = (1..=10).collect();
    /// let selected: Vec<i32> = set.range(3..6).copied().collect();
    /// assert_eq!(selected, vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn range<Q, R>(&self, range: R) -> PersistentTreeSetRangeIterator<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        PersistentTreeSetRangeIterator {
            inner: self.tree.range(range),
        }
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: Membership<T> + ?Sized,
    {
        !self.tree.iter().any(|element| other.contains(element))
    }
}

impl<T: Clone + Ord> PersistentTreeSet<T> {
    /// Creates a set containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_tree(BTreeSet::from([element]))
    }

    /// Inserts an element into the set.
    ///
    /// If the set already contains the element, returns a set that shares
    /// storage with the original.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut tree = BTreeSet::clone(&self.tree);
        tree.insert(element);
        Self::from_tree(tree)
    }

    /// Removes an element from the set.
    ///
    /// If the element doesn't exist, returns a set that shares storage with
    /// the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentTreeSet;
    ///
    /// let set: PersistentTreeSet<i32> = [1, 2, 3].into_iter().collect();
    /// let removed = set.remove(&2);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(removed.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains(element) {
            return self.clone();
        }
        let mut tree = BTreeSet::clone(&self.tree);
        tree.remove(element);
        Self::from_tree(tree)
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference<O>(&self, other: &O) -> Self
    where
        O: Membership<T> + ?Sized,
    {
        self.filter(|element| !other.contains(element))
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentTreeSet;
    ///
    /// let set_a: PersistentTreeSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: PersistentTreeSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let result: Vec<i32> = set_a.symmetric_difference(&set_b).into_iter().collect();
    /// assert_eq!(result, vec![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self::from_tree(
            self.tree
                .symmetric_difference(&other.tree)
                .cloned()
                .collect(),
        )
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset<O>(&self, other: &O) -> bool
    where
        O: Set<T>,
    {
        other.subset_of(self)
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl<T: Ord> Membership<T> for PersistentTreeSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.tree.contains(element)
    }
}

impl<T> Iterable<T> for PersistentTreeSet<T> {
    type Iter<'a>
        = PersistentTreeSetIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T: Clone + Ord> SameKind<T> for PersistentTreeSet<T> {
    fn empty(&self) -> Self {
        Self::new()
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let kept: BTreeSet<T> = self
            .tree
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        if kept.len() == self.len() {
            return self.clone();
        }
        Self::from_tree(kept)
    }

    fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut extended: Option<BTreeSet<T>> = None;
        for element in elements {
            match extended.as_mut() {
                Some(tree) => {
                    tree.insert(element);
                }
                None if !self.tree.contains(&element) => {
                    let mut tree = BTreeSet::clone(&self.tree);
                    tree.insert(element);
                    extended = Some(tree);
                }
                None => {}
            }
        }
        extended.map_or_else(|| self.clone(), Self::from_tree)
    }
}

impl<T: Clone + Ord> Set<T> for PersistentTreeSet<T> {}

// =============================================================================
// Operators
// =============================================================================

impl<T, O> BitOr<&O> for &PersistentTreeSet<T>
where
    T: Clone + Ord,
    O: Iterable<T> + ?Sized,
{
    type Output = PersistentTreeSet<T>;

    fn bitor(self, other: &O) -> Self::Output {
        self.union(other)
    }
}

impl<T, O> BitAnd<&O> for &PersistentTreeSet<T>
where
    T: Clone + Ord,
    O: Membership<T> + ?Sized,
{
    type Output = PersistentTreeSet<T>;

    fn bitand(self, other: &O) -> Self::Output {
        self.intersect(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentTreeSet`], in ascending order.
pub struct PersistentTreeSetIterator<'a, T> {
    inner: std::collections::btree_set::Iter<'a, T>,
}

impl<'a, T> Iterator for PersistentTreeSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentTreeSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for PersistentTreeSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// An iterator over a sub-range of a [`PersistentTreeSet`].
///
/// Created by [`PersistentTreeSet::range`].
pub struct PersistentTreeSetRangeIterator<'a, T> {
    inner: std::collections::btree_set::Range<'a, T>,
}

impl<'a, T> Iterator for PersistentTreeSetRangeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> DoubleEndedIterator for PersistentTreeSetRangeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// An owning iterator over the elements of a [`PersistentTreeSet`].
pub struct PersistentTreeSetIntoIterator<T> {
    inner: std::collections::btree_set::IntoIter<T>,
}

impl<T> Iterator for PersistentTreeSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentTreeSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for PersistentTreeSetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentTreeSet<T> {
    fn clone(&self) -> Self {
        Self {
            tree: ReferenceCounter::clone(&self.tree),
        }
    }
}

impl<T> Default for PersistentTreeSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PersistentTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_tree(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentTreeSet<T> {
    type Item = T;
    type IntoIter = PersistentTreeSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentTreeSetIntoIterator {
            inner: ReferenceCounter::unwrap_or_clone(self.tree).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentTreeSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentTreeSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Ord> PartialEq for PersistentTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.tree, &other.tree) || self.set_equals(other)
    }
}

impl<T: Clone + Ord> Eq for PersistentTreeSet<T> {}

impl<T: Clone + Ord + Hash> Hash for PersistentTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentTreeSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentTreeSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentTreeSet<T> {
    type Inner = T;
    type WithType<B> = PersistentTreeSet<B>;
}

impl<T: Clone> Foldable for PersistentTreeSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.tree.len()
    }
}

impl<T: Clone + Ord> Semigroup for PersistentTreeSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Clone + Ord> Monoid for PersistentTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentTreeSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::serialize_elements(serializer, self.len(), self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentTreeSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(super::SetVisitor::<Self, T>::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
