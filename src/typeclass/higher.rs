//! Naming a collection's element type, and the same collection around
//! another element type.
//!
//! [`Foldable`](super::Foldable) folds a set's elements, so it needs to know
//! what those elements are without the set kind being generic in a way Rust
//! can abstract over. A generic associated type carries both facts.
//!
//! # Example
//!
//! Mapping a set into another set of the same kind. Elements that map to
//! the same value collapse into one:
//!
//! ```rust
//! use setwise::persistent::PersistentTreeSet;
//! use setwise::typeclass::{Foldable, TypeConstructor};
//!
//! fn map_set<S, B, F>(set: S, function: F) -> S::WithType<B>
//! where
//!     S: Foldable,
//!     S::WithType<B>: FromIterator<B>,
//!     F: FnMut(S::Inner) -> B,
//! {
//!     set.to_list().into_iter().map(function).collect()
//! }
//!
//! let numbers: PersistentTreeSet<i32> = (1..=6).collect();
//! let remainders: PersistentTreeSet<i32> = map_set(numbers, |number| number % 3);
//! assert_eq!(remainders.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

/// A collection kind applied to an element type.
///
/// `Inner` is the element type; `WithType<B>` is the same kind holding `B`.
/// For every implementor, `Self::WithType<Self::Inner>` is `Self`.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same kind around a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}
