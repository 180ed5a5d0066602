//! The set contract.
//!
//! A set is an immutable, duplicate-free collection whose identity is its
//! content: two sets are equal, and hash alike, whenever they hold the same
//! elements, whatever their internal arrangement or concrete kind.
//!
//! The contract is split into capabilities a concrete kind supplies and
//! operations derived from them once for every kind:
//!
//! | Supplied                 | Derived                                       |
//! |--------------------------|-----------------------------------------------|
//! | [`Membership::contains`] | [`Membership::apply`], [`Membership::as_predicate`] |
//! | [`Iterable::iter`]       | [`Set::subset_of`], [`Set::set_equals`], [`Set::hash_code`] |
//! | [`SameKind::empty`]      | identity for [`Set::union`]                   |
//! | [`SameKind::filter`]     | [`Set::intersect`]                            |
//! | [`SameKind::concat`]     | [`Set::union`]                                |
//!
//! # Laws
//!
//! For all sets `a`, `b` and elements `e`:
//!
//! ```text
//! a.set_equals(&a)
//! a.set_equals(&b) == b.set_equals(&a)
//! a.set_equals(&b)  implies  a.hash_code() == b.hash_code()
//! a.union(&a.empty()).set_equals(&a)
//! a.intersect(&b).subset_of(&a) && a.intersect(&b).subset_of(&b)
//! (a.contains(e) || b.contains(e))  implies  a.union(&b).contains(e)
//! ```

mod capability;
mod contract;
mod std_impls;

pub use capability::{Iterable, Membership, SameKind};
pub use contract::Set;
