//! Persistent (immutable) insertion-ordered set.
//!
//! This module provides [`PersistentListSet`], a set that keeps its elements
//! in a shared vector in insertion order.
//!
//! - O(n) contains, insert and remove
//! - O(1) len, `is_empty` and clone
//!
//! Only `Eq` is required of the elements, so it is the kind to reach for
//! when elements cannot be hashed or ordered cheaply, or when the set is
//! small enough that a linear scan beats hashing.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentListSet;
//!
//! let set = PersistentListSet::new().insert("b").insert("a").insert("b");
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.as_slice(), &["b", "a"]);
//!
//! // The original set is preserved
//! let updated = set.insert("c");
//! assert_eq!(set.len(), 2);
//! assert_eq!(updated.len(), 3);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr};

use super::{DuplicateElementError, ReferenceCounter};
use crate::set::{Iterable, Membership, SameKind, Set};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// PersistentListSet Definition
// =============================================================================

/// A persistent (immutable) set that remembers insertion order.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `contains`     | O(n)       |
/// | `insert`       | O(n)       |
/// | `remove`       | O(n)       |
/// | `len`          | O(1)       |
/// | `union`        | O(n * m)   |
/// | `intersect`    | O(n * cost of `other.contains`) |
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::PersistentListSet;
///
/// let set = PersistentListSet::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
pub struct PersistentListSet<T> {
    elements: ReferenceCounter<Vec<T>>,
}

impl<T> PersistentListSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set: PersistentListSet<i32> = PersistentListSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: ReferenceCounter::new(Vec::new()),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set = PersistentListSet::new().insert(3).insert(1).insert(2);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentListSetIterator<'_, T> {
        PersistentListSetIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Eq> PersistentListSet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set = PersistentListSet::new().insert("hello".to_string());
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(element).is_some()
    }

    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.elements
            .iter()
            .position(|candidate| candidate.borrow() == element)
    }

    /// Builds a set from a vector the caller asserts is duplicate-free.
    ///
    /// Insertion order is the vector's order.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] naming the first pair of equal
    /// elements if the assertion does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set = PersistentListSet::try_from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// assert!(PersistentListSet::try_from_vec(vec![1, 1]).is_err());
    /// ```
    pub fn try_from_vec(elements: Vec<T>) -> Result<Self, DuplicateElementError> {
        for (position, element) in elements.iter().enumerate() {
            if let Some(first_position) = elements[..position]
                .iter()
                .position(|earlier| earlier == element)
            {
                return Err(DuplicateElementError {
                    position,
                    first_position,
                });
            }
        }
        Ok(Self {
            elements: ReferenceCounter::new(elements),
        })
    }

    /// Builds a set from a vector, keeping the first occurrence of each
    /// element and dropping later duplicates.
    ///
    /// Each element is checked against the ones kept so far, so this takes
    /// O(n²) comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set = PersistentListSet::from_vec(vec![2, 1, 2, 3, 1]);
    /// assert_eq!(set.as_slice(), &[2, 1, 3]);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(elements.len());
        for element in elements {
            if !unique.contains(&element) {
                unique.push(element);
            }
        }
        Self {
            elements: ReferenceCounter::new(unique),
        }
    }
}

impl<T: Clone + Eq> PersistentListSet<T> {
    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: ReferenceCounter::new(vec![element]),
        }
    }

    /// Inserts an element at the end of the set.
    ///
    /// If the set already contains the element, returns a set that shares
    /// storage with the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set1 = PersistentListSet::new().insert(1);
    /// let set2 = set1.insert(2);
    ///
    /// assert_eq!(set1.len(), 1); // Original unchanged
    /// assert_eq!(set2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend(self.elements.iter().cloned());
        elements.push(element);
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Removes an element from the set.
    ///
    /// If the element doesn't exist, returns a set that shares storage with
    /// the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set = PersistentListSet::new().insert(1).insert(2);
    /// let removed = set.remove(&1);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(removed.as_slice(), &[2]);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.position(element) {
            None => self.clone(),
            Some(index) => {
                let mut elements = self.elements.to_vec();
                elements.remove(index);
                Self {
                    elements: ReferenceCounter::new(elements),
                }
            }
        }
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set_a: PersistentListSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: PersistentListSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.difference(&set_b).as_slice(), &[1]);
    /// ```
    #[must_use]
    pub fn difference<O>(&self, other: &O) -> Self
    where
        O: Membership<T> + ?Sized,
    {
        self.filter(|element| !other.contains(element))
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// Elements of `self` come first, in their order, followed by those of
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set_a: PersistentListSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: PersistentListSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b).as_slice(), &[1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset<O>(&self, other: &O) -> bool
    where
        O: Set<T>,
    {
        other.subset_of(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    ///
    /// let set_a: PersistentListSet<i32> = [1, 2].into_iter().collect();
    /// let set_b: PersistentListSet<i32> = [3, 4].into_iter().collect();
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_a));
    /// ```
    #[must_use]
    pub fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: Membership<T> + ?Sized,
    {
        !self.elements.iter().any(|element| other.contains(element))
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl<T: Eq> Membership<T> for PersistentListSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }
}

impl<T> Iterable<T> for PersistentListSet<T> {
    type Iter<'a>
        = PersistentListSetIterator<'a, T>
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

impl<T: Clone + Eq> SameKind<T> for PersistentListSet<T> {
    fn empty(&self) -> Self {
        Self::new()
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let kept: Vec<T> = self
            .elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        if kept.len() == self.len() {
            return self.clone();
        }
        Self {
            elements: ReferenceCounter::new(kept),
        }
    }

    fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut extended: Option<Vec<T>> = None;
        for element in elements {
            let present = extended
                .as_ref()
                .map_or_else(|| self.contains(&element), |vec| vec.contains(&element));
            if !present {
                extended
                    .get_or_insert_with(|| self.elements.to_vec())
                    .push(element);
            }
        }
        extended.map_or_else(
            || self.clone(),
            |elements| Self {
                elements: ReferenceCounter::new(elements),
            },
        )
    }
}

impl<T: Clone + Eq> Set<T> for PersistentListSet<T> {}

// =============================================================================
// Operators
// =============================================================================

impl<T, O> BitOr<&O> for &PersistentListSet<T>
where
    T: Clone + Eq,
    O: Iterable<T> + ?Sized,
{
    type Output = PersistentListSet<T>;

    fn bitor(self, other: &O) -> Self::Output {
        self.union(other)
    }
}

impl<T, O> BitAnd<&O> for &PersistentListSet<T>
where
    T: Clone + Eq,
    O: Membership<T> + ?Sized,
{
    type Output = PersistentListSet<T>;

    fn bitand(self, other: &O) -> Self::Output {
        self.intersect(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentListSet`], in insertion order.
pub struct PersistentListSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for PersistentListSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentListSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for PersistentListSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// An owning iterator over the elements of a [`PersistentListSet`].
pub struct PersistentListSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for PersistentListSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PersistentListSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for PersistentListSetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentListSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for PersistentListSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> FromIterator<T> for PersistentListSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentListSet<T> {
    type Item = T;
    type IntoIter = PersistentListSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentListSetIntoIterator {
            inner: ReferenceCounter::unwrap_or_clone(self.elements).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentListSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentListSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Eq> PartialEq for PersistentListSet<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements) || self.set_equals(other)
    }
}

impl<T: Clone + Eq> Eq for PersistentListSet<T> {}

impl<T: Clone + Eq + Hash> Hash for PersistentListSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentListSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentListSet<T> {
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

impl<T> TypeConstructor for PersistentListSet<T> {
    type Inner = T;
    type WithType<B> = PersistentListSet<B>;
}

impl<T: Clone> Foldable for PersistentListSet<T> {
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
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

/// Union is the semigroup operation.
impl<T: Clone + Eq> Semigroup for PersistentListSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

/// The empty set is the identity of union.
impl<T: Clone + Eq> Monoid for PersistentListSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentListSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::serialize_elements(serializer, self.len(), self.iter())
    }
}

/// Deserializes from a sequence, keeping the first occurrence of each
/// element.
///
/// Duplicates are dropped with the same linear membership test as
/// [`PersistentListSet::from_vec`], so reading `n` elements costs O(n²)
/// comparisons. Bound the input length before deserializing untrusted data,
/// or deserialize into [`PersistentHashSet`](super::PersistentHashSet) or
/// [`PersistentTreeSet`](super::PersistentTreeSet) instead.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentListSet<T>
where
    T: serde::Deserialize<'de> + Eq,
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
