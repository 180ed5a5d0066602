//! Persistent (immutable) hash set.
//!
//! This module provides [`PersistentHashSet`], a set backed by a shared hash
//! table.
//!
//! - O(1) average contains
//! - O(n) insert and remove (copy-on-write of the table)
//! - O(1) len, `is_empty` and clone
//!
//! The table is built with [`element_hasher`](crate::hashing::element_hasher),
//! so the hasher follows the crate's `fxhash`/`ahash` features.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentHashSet;
//!
//! let set = PersistentHashSet::new().insert(1).insert(2).insert(1);
//! assert_eq!(set.len(), 2);
//!
//! let smaller = set.remove(&1);
//! assert_eq!(set.len(), 2);
//! assert_eq!(smaller.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr};

use super::ReferenceCounter;
use crate::hashing::{ElementHasher, element_hasher};
use crate::set::{Iterable, Membership, SameKind, Set};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// PersistentHashSet Definition
// =============================================================================

/// A persistent (immutable) hash set.
///
/// Iteration order is unspecified and may differ between two equal sets.
///
/// # Time Complexity
///
/// | Operation      | Complexity       |
/// |----------------|------------------|
/// | `new`          | O(1)             |
/// | `contains`     | O(1) average     |
/// | `insert`       | O(n)             |
/// | `remove`       | O(n)             |
/// | `len`          | O(1)             |
/// | `union`        | O(n + m) average |
/// | `intersect`    | O(n * cost of `other.contains`) |
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::PersistentHashSet;
///
/// let set: PersistentHashSet<&str> = ["apple", "pear"].into_iter().collect();
/// assert!(set.contains("apple"));
/// assert!(!set.contains("plum"));
/// ```
pub struct PersistentHashSet<T> {
    table: ReferenceCounter<HashSet<T, ElementHasher>>,
}

impl<T> PersistentHashSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentHashSet;
    ///
    /// let set: PersistentHashSet<String> = PersistentHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: ReferenceCounter::new(HashSet::with_hasher(element_hasher())),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns an iterator over the elements, in unspecified order.
    #[must_use]
    pub fn iter(&self) -> PersistentHashSetIterator<'_, T> {
        PersistentHashSetIterator {
            inner: self.table.iter(),
        }
    }
}

impl<T: Eq + Hash> PersistentHashSet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the element
    /// type.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains(element)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: Membership<T> + ?Sized,
    {
        !self.table.iter().any(|element| other.contains(element))
    }

    fn from_table(table: HashSet<T, ElementHasher>) -> Self {
        Self {
            table: ReferenceCounter::new(table),
        }
    }
}

impl<T: Clone + Eq + Hash> PersistentHashSet<T> {
    /// Creates a set containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut table = HashSet::with_capacity_and_hasher(1, element_hasher());
        table.insert(element);
        Self::from_table(table)
    }

    /// Inserts an element into the set.
    ///
    /// If the set already contains the element, returns a set that shares
    /// storage with the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentHashSet;
    ///
    /// let set1 = PersistentHashSet::new().insert("a");
    /// let set2 = set1.insert("b");
    ///
    /// assert_eq!(set1.len(), 1);
    /// assert_eq!(set2.len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut table = HashSet::clone(&self.table);
        table.insert(element);
        Self::from_table(table)
    }

    /// Removes an element from the set.
    ///
    /// If the element doesn't exist, returns a set that shares storage with
    /// the original.
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.contains(element) {
            return self.clone();
        }
        let mut table = HashSet::clone(&self.table);
        table.remove(element);
        Self::from_table(table)
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentHashSet;
    ///
    /// let set_a: PersistentHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: PersistentHashSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.difference(&set_b), PersistentHashSet::singleton(1));
    /// ```
    #[must_use]
    pub fn difference<O>(&self, other: &O) -> Self
    where
        O: Membership<T> + ?Sized,
    {
        self.filter(|element| !other.contains(element))
    }

    /// Returns the elements that are in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut table = HashSet::with_hasher(element_hasher());
        table.extend(self.table.symmetric_difference(&other.table).cloned());
        Self::from_table(table)
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

impl<T: Eq + Hash> Membership<T> for PersistentHashSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.table.contains(element)
    }
}

impl<T> Iterable<T> for PersistentHashSet<T> {
    type Iter<'a>
        = PersistentHashSetIterator<'a, T>
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

impl<T: Clone + Eq + Hash> SameKind<T> for PersistentHashSet<T> {
    fn empty(&self) -> Self {
        Self::new()
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = HashSet::with_hasher(element_hasher());
        kept.extend(
            self.table
                .iter()
                .filter(|element| predicate(element))
                .cloned(),
        );
        if kept.len() == self.len() {
            return self.clone();
        }
        Self::from_table(kept)
    }

    fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut extended: Option<HashSet<T, ElementHasher>> = None;
        for element in elements {
            match extended.as_mut() {
                Some(table) => {
                    table.insert(element);
                }
                None if !self.table.contains(&element) => {
                    let mut table = HashSet::clone(&self.table);
                    table.insert(element);
                    extended = Some(table);
                }
                None => {}
            }
        }
        extended.map_or_else(|| self.clone(), Self::from_table)
    }
}

impl<T: Clone + Eq + Hash> Set<T> for PersistentHashSet<T> {}

// =============================================================================
// Operators
// =============================================================================

impl<T, O> BitOr<&O> for &PersistentHashSet<T>
where
    T: Clone + Eq + Hash,
    O: Iterable<T> + ?Sized,
{
    type Output = PersistentHashSet<T>;

    fn bitor(self, other: &O) -> Self::Output {
        self.union(other)
    }
}

impl<T, O> BitAnd<&O> for &PersistentHashSet<T>
where
    T: Clone + Eq + Hash,
    O: Membership<T> + ?Sized,
{
    type Output = PersistentHashSet<T>;

    fn bitand(self, other: &O) -> Self::Output {
        self.intersect(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentHashSet`].
pub struct PersistentHashSetIterator<'a, T> {
    inner: std::collections::hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for PersistentHashSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentHashSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`PersistentHashSet`].
pub struct PersistentHashSetIntoIterator<T> {
    inner: std::collections::hash_set::IntoIter<T>,
}

impl<T> Iterator for PersistentHashSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentHashSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentHashSet<T> {
    fn clone(&self) -> Self {
        Self {
            table: ReferenceCounter::clone(&self.table),
        }
    }
}

impl<T> Default for PersistentHashSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for PersistentHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = HashSet::with_hasher(element_hasher());
        table.extend(iter);
        Self::from_table(table)
    }
}

impl<T: Clone> IntoIterator for PersistentHashSet<T> {
    type Item = T;
    type IntoIter = PersistentHashSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentHashSetIntoIterator {
            inner: ReferenceCounter::unwrap_or_clone(self.table).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentHashSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentHashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for PersistentHashSet<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.table, &other.table) || self.set_equals(other)
    }
}

impl<T: Clone + Eq + Hash> Eq for PersistentHashSet<T> {}

impl<T: Clone + Eq + Hash> Hash for PersistentHashSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentHashSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentHashSet<T> {
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

impl<T> TypeConstructor for PersistentHashSet<T> {
    type Inner = T;
    type WithType<B> = PersistentHashSet<B>;
}

impl<T: Clone> Foldable for PersistentHashSet<T> {
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
        // No defined order, so right and left folds visit the same sequence.
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.table.len()
    }
}

impl<T: Clone + Eq + Hash> Semigroup for PersistentHashSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Clone + Eq + Hash> Monoid for PersistentHashSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentHashSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::serialize_elements(serializer, self.len(), self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentHashSet<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_single_element() {
        let set = PersistentHashSet::singleton(42);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_contains_with_borrowed_form() {
        let set: PersistentHashSet<String> = ["a".to_string(), "b".to_string()]
            .into_iter()
            .collect();
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }

    #[rstest]
    fn test_insert_existing_shares_storage() {
        let set = PersistentHashSet::singleton(1);
        let same = set.insert(1);
        assert!(ReferenceCounter::ptr_eq(&set.table, &same.table));
    }

    #[rstest]
    fn test_intersect_with_no_removals_shares_storage() {
        let set: PersistentHashSet<i32> = [1, 2].into_iter().collect();
        let superset: PersistentHashSet<i32> = [1, 2, 3].into_iter().collect();
        let same = set.intersect(&superset);
        assert!(ReferenceCounter::ptr_eq(&set.table, &same.table));
    }

    #[rstest]
    fn test_union_with_std_hash_set() {
        let set: PersistentHashSet<i32> = [1, 2].into_iter().collect();
        let other: std::collections::HashSet<i32> = [2, 3].into_iter().collect();
        let union = set.union(&other);
        assert_eq!(union.len(), 3);
        assert!(union.contains(&3));
    }

    #[rstest]
    fn test_symmetric_difference() {
        let set_a: PersistentHashSet<i32> = [1, 2, 3].into_iter().collect();
        let set_b: PersistentHashSet<i32> = [3, 4].into_iter().collect();
        let expected: PersistentHashSet<i32> = [1, 2, 4].into_iter().collect();
        assert_eq!(set_a.symmetric_difference(&set_b), expected);
    }

    #[rstest]
    fn test_is_superset_and_disjoint() {
        let large: PersistentHashSet<i32> = [1, 2, 3].into_iter().collect();
        let small: PersistentHashSet<i32> = [1, 3].into_iter().collect();
        let other: PersistentHashSet<i32> = [7].into_iter().collect();
        assert!(large.is_superset(&small));
        assert!(!small.is_superset(&large));
        assert!(large.is_disjoint(&other));
        assert!(!large.is_disjoint(&small));
    }

    #[rstest]
    fn test_hash_matches_between_equal_sets() {
        use std::collections::hash_map::DefaultHasher;

        let forward: PersistentHashSet<i32> = (0..50).collect();
        let backward: PersistentHashSet<i32> = (0..50).rev().collect();

        let mut forward_hasher = DefaultHasher::new();
        forward.hash(&mut forward_hasher);
        let mut backward_hasher = DefaultHasher::new();
        backward.hash(&mut backward_hasher);

        assert_eq!(forward_hasher.finish(), backward_hasher.finish());
    }

    #[rstest]
    fn test_fold_map_collects_every_letter() {
        let set: PersistentHashSet<&str> = ["ab", "cde"].into_iter().collect();
        let letters: Vec<char> = set.fold_map(|word| word.chars().collect::<Vec<char>>());
        assert_eq!(letters.len(), 5);
    }
}
