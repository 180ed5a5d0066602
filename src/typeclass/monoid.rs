//! Associative combination with a neutral value.
//!
//! Every set kind is a monoid: union is the operation and the empty set is
//! the neutral value, so `combine_all` over no sets at all is the empty set.
//!
//! ```text
//! S::empty().combine(a) == a == a.combine(S::empty())
//! ```
//!
//! [`Monoid::empty`] is an associated function. It coexists with the
//! `SameKind::empty(&self)` method of the set contract, which asks an
//! existing set for an empty set of its kind.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentListSet;
//! use setwise::typeclass::Monoid;
//!
//! let tags: Vec<PersistentListSet<&str>> = vec![
//!     ["red", "big"].into_iter().collect(),
//!     ["big", "old"].into_iter().collect(),
//! ];
//! let all = PersistentListSet::combine_all(tags);
//! assert_eq!(all.as_slice(), &["red", "big", "old"]);
//! assert!(PersistentListSet::<&str>::combine_all(Vec::new()).is_empty_value());
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with a neutral value.
pub trait Monoid: Semigroup {
    /// The neutral value of [`Semigroup::combine`].
    fn empty() -> Self;

    /// Combines every value of `values`, starting from [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        Self::reduce_all(values).unwrap_or_else(Self::empty)
    }

    /// Returns `true` if `self` is the neutral value.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        self == &Self::empty()
    }
}

/// The empty vector, the starting point when `fold_map` gathers into a `Vec`.
impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
