//! Persistent (immutable) bit set.
//!
//! This module provides [`PersistentBitSet`], a set of `usize` values stored
//! as one bit per element in shared 64-bit words. Only the words holding at
//! least one element are kept, as `(word index, word)` pairs sorted by index.
//!
//! - O(log b) contains, for `b` stored words
//! - O(b) insert, remove and clone-on-write
//! - O(1) len, `is_empty` and clone
//!
//! Memory use grows with the number of occupied words, not with the largest
//! element, so `usize::MAX` costs one word like any other element. Clustered
//! indices pack best.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentBitSet;
//!
//! let set: PersistentBitSet = [3, 64, 1, usize::MAX].into_iter().collect();
//!
//! assert!(set.contains(&64));
//! assert_eq!(set.iter().collect::<Vec<usize>>(), vec![1, 3, 64, usize::MAX]);
//! assert_eq!(format!("{}", set.remove(&usize::MAX)), "{1, 3, 64}");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr};

use super::ReferenceCounter;
use crate::set::{Iterable, Membership, SameKind, Set};
use crate::typeclass::{Monoid, Semigroup};

const WORD_BITS: usize = u64::BITS as usize;

/// A word index paired with its nonzero bits.
type Block = (usize, u64);

#[inline]
const fn word_index(element: usize) -> usize {
    element / WORD_BITS
}

#[inline]
const fn bit_mask(element: usize) -> u64 {
    1 << (element % WORD_BITS)
}

#[inline]
const fn element_at(index: usize, bit: u32) -> usize {
    // index <= usize::MAX / 64, so this cannot overflow.
    index * WORD_BITS + bit as usize
}

fn find_block(blocks: &[Block], index: usize) -> Result<usize, usize> {
    blocks.binary_search_by_key(&index, |&(block_index, _)| block_index)
}

fn set_bit(blocks: &mut Vec<Block>, element: usize) {
    let index = word_index(element);
    match find_block(blocks, index) {
        Ok(position) => blocks[position].1 |= bit_mask(element),
        Err(position) => blocks.insert(position, (index, bit_mask(element))),
    }
}

fn clear_bit(blocks: &mut [Block], element: usize) {
    if let Ok(position) = find_block(blocks, word_index(element)) {
        blocks[position].1 &= !bit_mask(element);
    }
}

// =============================================================================
// PersistentBitSet Definition
// =============================================================================

/// A persistent (immutable) set of `usize` values packed into bits.
///
/// Stored blocks are sorted by word index and never hold a zero word, so two
/// bit sets with the same elements have identical storage.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `new`                  | O(1)       |
/// | `contains`             | O(log b)   |
/// | `insert`               | O(b)       |
/// | `remove`               | O(b)       |
/// | `symmetric_difference` | O(b)       |
/// | `len`                  | O(1)       |
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::PersistentBitSet;
///
/// let set = PersistentBitSet::new().insert(5).insert(2);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.first(), Some(2));
/// assert_eq!(set.last(), Some(5));
/// ```
pub struct PersistentBitSet {
    blocks: ReferenceCounter<Vec<Block>>,
    len: usize,
}

impl PersistentBitSet {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: ReferenceCounter::new(Vec::new()),
            len: 0,
        }
    }

    /// Creates a set containing a single element.
    #[must_use]
    pub fn singleton(element: usize) -> Self {
        Self::new().insert(element)
    }

    fn from_blocks(mut blocks: Vec<Block>) -> Self {
        blocks.retain(|&(_, word)| word != 0);
        let len = blocks.iter().map(|(_, word)| word.count_ones() as usize).sum();
        Self {
            blocks: ReferenceCounter::new(blocks),
            len,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the set contains the specified element.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &usize) -> bool {
        find_block(&self.blocks, word_index(*element))
            .is_ok_and(|position| self.blocks[position].1 & bit_mask(*element) != 0)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.blocks
            .first()
            .map(|&(index, word)| element_at(index, word.trailing_zeros()))
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.blocks
            .last()
            .map(|&(index, word)| element_at(index, u64::BITS - 1 - word.leading_zeros()))
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Elements are yielded by value.
    #[must_use]
    pub fn iter(&self) -> PersistentBitSetIterator<'_> {
        let (index, current) = self.blocks.first().copied().unwrap_or((0, 0));
        PersistentBitSetIterator {
            blocks: &self.blocks,
            position: 0,
            index,
            current,
            remaining: self.len,
        }
    }

    /// Inserts an element into the set.
    ///
    /// If the set already contains the element, returns a set that shares
    /// storage with the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentBitSet;
    ///
    /// let set1 = PersistentBitSet::new().insert(130);
    /// let set2 = set1.insert(7);
    ///
    /// assert_eq!(set1.len(), 1);
    /// assert_eq!(set2.len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, element: usize) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut blocks = self.blocks.to_vec();
        set_bit(&mut blocks, element);
        Self {
            blocks: ReferenceCounter::new(blocks),
            len: self.len + 1,
        }
    }

    /// Removes an element from the set.
    ///
    /// If the element doesn't exist, returns a set that shares storage with
    /// the original.
    #[must_use]
    pub fn remove(&self, element: &usize) -> Self {
        if !self.contains(element) {
            return self.clone();
        }
        let mut blocks = self.blocks.to_vec();
        clear_bit(&mut blocks, *element);
        Self::from_blocks(blocks)
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference<O>(&self, other: &O) -> Self
    where
        O: Membership<usize> + ?Sized,
    {
        self.filter(|element| !other.contains(element))
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// Computed word by word, merging the two block lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentBitSet;
    ///
    /// let set_a: PersistentBitSet = [1, 2, 100].into_iter().collect();
    /// let set_b: PersistentBitSet = [2, 100, 200].into_iter().collect();
    ///
    /// let result: Vec<usize> = set_a.symmetric_difference(&set_b).iter().collect();
    /// assert_eq!(result, vec![1, 200]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut blocks = Vec::with_capacity(self.blocks.len() + other.blocks.len());
        let mut left = self.blocks.iter().copied().peekable();
        let mut right = other.blocks.iter().copied().peekable();
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(&(left_index, left_word)), Some(&(right_index, right_word))) => {
                    match left_index.cmp(&right_index) {
                        Ordering::Less => left.next(),
                        Ordering::Greater => right.next(),
                        Ordering::Equal => {
                            left.next();
                            right.next();
                            Some((left_index, left_word ^ right_word))
                        }
                    }
                }
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            blocks.extend(next);
        }
        Self::from_blocks(blocks)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset<O>(&self, other: &O) -> bool
    where
        O: Set<usize>,
    {
        other.subset_of(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: Membership<usize> + ?Sized,
    {
        !self.iter().any(|element| other.contains(&element))
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl Membership<usize> for PersistentBitSet {
    #[inline]
    fn contains(&self, element: &usize) -> bool {
        Self::contains(self, element)
    }
}

impl Iterable<usize> for PersistentBitSet {
    type Iter<'a> = PersistentBitSetIterator<'a>;

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl SameKind<usize> for PersistentBitSet {
    fn empty(&self) -> Self {
        Self::new()
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&usize) -> bool,
    {
        let mut blocks = self.blocks.to_vec();
        let mut removed = false;
        for element in self.iter() {
            if !predicate(&element) {
                clear_bit(&mut blocks, element);
                removed = true;
            }
        }
        if removed {
            Self::from_blocks(blocks)
        } else {
            self.clone()
        }
    }

    fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut extended: Option<Vec<Block>> = None;
        for element in elements {
            if extended.is_none() && self.contains(&element) {
                continue;
            }
            set_bit(extended.get_or_insert_with(|| self.blocks.to_vec()), element);
        }
        extended.map_or_else(|| self.clone(), Self::from_blocks)
    }
}

impl Set<usize> for PersistentBitSet {}

// =============================================================================
// Operators
// =============================================================================

impl<O> BitOr<&O> for &PersistentBitSet
where
    O: Iterable<usize> + ?Sized,
{
    type Output = PersistentBitSet;

    fn bitor(self, other: &O) -> Self::Output {
        self.union(other)
    }
}

impl<O> BitAnd<&O> for &PersistentBitSet
where
    O: Membership<usize> + ?Sized,
{
    type Output = PersistentBitSet;

    fn bitand(self, other: &O) -> Self::Output {
        self.intersect(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`PersistentBitSet`], in ascending
/// order.
pub struct PersistentBitSetIterator<'a> {
    blocks: &'a [Block],
    position: usize,
    index: usize,
    current: u64,
    remaining: usize,
}

impl Iterator for PersistentBitSetIterator<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.position += 1;
            (self.index, self.current) = *self.blocks.get(self.position)?;
        }
        let bit = self.current.trailing_zeros();
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(element_at(self.index, bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PersistentBitSetIterator<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over the elements of a [`PersistentBitSet`].
pub struct PersistentBitSetIntoIterator {
    inner: std::vec::IntoIter<usize>,
}

impl Iterator for PersistentBitSetIntoIterator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PersistentBitSetIntoIterator {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Clone for PersistentBitSet {
    fn clone(&self) -> Self {
        Self {
            blocks: ReferenceCounter::clone(&self.blocks),
            len: self.len,
        }
    }
}

impl Default for PersistentBitSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<usize> for PersistentBitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new().concat(iter)
    }
}

impl IntoIterator for PersistentBitSet {
    type Item = usize;
    type IntoIter = PersistentBitSetIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<usize> = self.iter().collect();
        PersistentBitSetIntoIterator {
            inner: elements.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a PersistentBitSet {
    type Item = usize;
    type IntoIter = PersistentBitSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for PersistentBitSet {
    fn eq(&self, other: &Self) -> bool {
        // Block storage is canonical, so equal content means equal blocks.
        self.len == other.len
            && (ReferenceCounter::ptr_eq(&self.blocks, &other.blocks) || self.blocks == other.blocks)
    }
}

impl Eq for PersistentBitSet {}

impl Hash for PersistentBitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Debug for PersistentBitSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for PersistentBitSet {
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

impl Semigroup for PersistentBitSet {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl Monoid for PersistentBitSet {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PersistentBitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::serialize_elements(serializer, self.len, self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PersistentBitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(super::SetVisitor::<Self, usize>::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
