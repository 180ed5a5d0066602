//! Reducing a set's elements to a single value.
//!
//! The fold order is the order the kind enumerates its elements: insertion
//! order for the list kind, ascending for the tree kind, unspecified for the
//! hash kind. Folds whose result ignores order (sums, counts, unions) agree
//! across kinds holding the same elements; order-sensitive folds only agree
//! between kinds with the same enumeration order.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::{PersistentHashSet, PersistentTreeSet};
//! use setwise::typeclass::Foldable;
//!
//! let prices: PersistentHashSet<u32> = [30, 10, 20].into_iter().collect();
//! assert_eq!(prices.fold_left(0, |total, price| total + price), 60);
//!
//! let names: PersistentTreeSet<&str> = ["cy", "ann", "bo"].into_iter().collect();
//! let joined = names.fold_right(String::new(), |name, tail| format!("{name}{tail}"));
//! assert_eq!(joined, "annbocy");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A collection whose elements can be folded into a summary value.
///
/// Implementors supply `fold_left` and `fold_right`; the rest is derived.
/// `is_empty` and `length` are worth overriding when the storage knows its
/// size.
pub trait Foldable: TypeConstructor {
    /// Folds front to back, starting from `init`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds back to front, starting from `init`.
    ///
    /// Kinds without a defined order may visit elements in the same order as
    /// `fold_left`.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a [`Monoid`] and combines the results.
    ///
    /// ```rust
    /// use setwise::persistent::{PersistentListSet, PersistentTreeSet};
    /// use setwise::typeclass::Foldable;
    ///
    /// let words: PersistentListSet<&str> = ["set", "sum"].into_iter().collect();
    /// let letters: PersistentTreeSet<char> =
    ///     words.fold_map(|word| word.chars().collect::<PersistentTreeSet<char>>());
    /// assert_eq!(letters.iter().collect::<String>(), "emstu");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |combined, element| {
            combined.combine(function(element))
        })
    }

    /// Returns `true` if there is nothing to fold.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Counts the elements by folding over them.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// The first element, in fold order, that satisfies `predicate`.
    ///
    /// Later elements are still visited but not tested.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if some element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |seen, element| seen || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`, including when
    /// there are no elements.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}
