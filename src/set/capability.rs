//! The capabilities a concrete set kind supplies.
//!
//! Each trait is one orthogonal capability:
//!
//! - [`Membership`]: the characteristic function of the set
//! - [`Iterable`]: enumeration of every element exactly once
//! - [`SameKind`]: building a new set of the same concrete kind
//!
//! A concrete kind implements all three and gets every derived operation of
//! [`Set`](super::Set) for free.

use std::borrow::Borrow;

/// Membership test, and the view of a set as a predicate over its elements.
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::PersistentTreeSet;
/// use setwise::set::Membership;
///
/// let primes: PersistentTreeSet<u32> = [2, 3, 5, 7].into_iter().collect();
///
/// assert!(Membership::contains(&primes, &5));
/// assert!(primes.apply(&7));
///
/// let small_primes: Vec<u32> = (0..10).filter(|n| primes.apply(n)).collect();
/// assert_eq!(small_primes, vec![2, 3, 5, 7]);
/// ```
pub trait Membership<T> {
    /// Returns `true` if `element` is in the set.
    ///
    /// Total: never panics for a well-formed set.
    fn contains(&self, element: &T) -> bool;

    /// The set as its characteristic function. Same as [`contains`](Self::contains).
    #[inline]
    fn apply(&self, element: &T) -> bool {
        self.contains(element)
    }

    /// Returns a closure that delegates to [`contains`](Self::contains).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::persistent::PersistentListSet;
    /// use setwise::set::Membership;
    ///
    /// let vowels: PersistentListSet<char> = "aeiou".chars().collect();
    /// let is_vowel = vowels.as_predicate();
    ///
    /// let count = "persistent".chars().filter(|c| is_vowel(c)).count();
    /// assert_eq!(count, 3);
    /// ```
    fn as_predicate(&self) -> impl Fn(&T) -> bool + '_ {
        move |element| self.contains(element)
    }
}

/// Enumeration of a set's elements.
///
/// Each element is yielded exactly once. Items only need to borrow as `T`,
/// so kinds that store elements in a packed form (such as bit sets) can
/// yield them by value.
pub trait Iterable<T> {
    /// The iterator over the elements.
    type Iter<'a>: Iterator<Item: Borrow<T>>
    where
        Self: 'a,
        T: 'a;

    /// Returns an iterator over every element.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of elements.
    ///
    /// The default counts the iterator; kinds that track their length
    /// override it.
    fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Construction of new sets of the same concrete kind.
///
/// These are the only transforms the derived operations need: `intersect`
/// is a `filter`, `union` is a `concat`.
pub trait SameKind<T>: Sized {
    /// The empty set of the same concrete kind as `self`.
    #[must_use]
    fn empty(&self) -> Self;

    /// A new set holding exactly the elements that satisfy `predicate`.
    #[must_use]
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool;

    /// A new set holding every element of `self` plus every element of
    /// `elements`, skipping those already present.
    #[must_use]
    fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>;
}
