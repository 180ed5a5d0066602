//! # setwise
//!
//! Immutable sets with content-based equality and order-independent hashing.
//!
//! ## Overview
//!
//! A set here is a value: two sets are equal, and produce the same hash code,
//! whenever they hold the same elements, regardless of insertion order,
//! internal layout or concrete kind. The crate is organized as:
//!
//! - **Hashing**: MurmurHash3-style mixing and the unordered hash used by
//!   every set
//! - **Set contract**: the [`Membership`](set::Membership),
//!   [`Iterable`](set::Iterable) and [`SameKind`](set::SameKind) capabilities,
//!   and the [`Set`](set::Set) trait deriving subset, equality, hashing,
//!   union and intersection from them
//! - **Persistent sets**: list, hash, tree and bit set kinds whose versions
//!   share storage until an update copies it
//! - **Type Classes**: Semigroup, Monoid and Foldable
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Semigroup, Monoid, Foldable)
//! - `persistent`: Persistent set kinds
//! - `arc`: Use `Arc` instead of `Rc` so persistent sets are `Send + Sync`
//! - `serde`: Serialization of persistent sets as sequences
//! - `fxhash`, `ahash`: Alternative element hashers
//! - `full`: Enable `typeclass`, `persistent`, `arc` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let evens: PersistentHashSet<usize> = [2, 4, 6].into_iter().collect();
//! let small: PersistentTreeSet<usize> = (0..5).collect();
//!
//! let both = small.intersect(&evens);
//! assert_eq!(both, [2, 4].into_iter().collect::<PersistentListSet<usize>>());
//! assert_eq!(both.hash_code(), [4, 2].into_iter().collect::<PersistentBitSet>().hash_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

pub mod hashing;
pub mod set;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
