//! Algebraic views of the set kinds.
//!
//! - [`Semigroup`] and [`Monoid`]: sets combine under union, with the empty
//!   set as the neutral value
//! - [`Foldable`]: a set's elements reduce to one value, in the kind's
//!   enumeration order
//! - [`TypeConstructor`]: names a kind's element type, and the same kind
//!   around another element type, so `Foldable` can be stated once for all
//!   generic kinds
//!
//! `Vec` is a monoid under concatenation so that `fold_map` can gather
//! elements into a vector.
//!
//! # Examples
//!
//! ```rust
//! use setwise::persistent::PersistentTreeSet;
//! use setwise::typeclass::{Foldable, Monoid};
//!
//! let groups = vec![
//!     [1, 2].into_iter().collect::<PersistentTreeSet<i32>>(),
//!     [2, 3].into_iter().collect(),
//! ];
//! let all = PersistentTreeSet::combine_all(groups);
//! assert_eq!(all.fold_left(0, |sum, element| sum + element), 6);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
