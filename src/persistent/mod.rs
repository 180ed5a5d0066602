//! Persistent (immutable) set kinds.
//!
//! Every kind here implements the full [`Set`](crate::set::Set) contract.
//! Storage is whole-collection copy-on-write: cloning a set is O(1) and
//! shares one reference-counted collection, an update that changes nothing
//! returns a set sharing that collection, and an update that does change
//! something copies the whole collection once, in O(n). Operations such as
//! `insert`, `union` or `intersect` return new sets while the originals stay
//! valid.
//!
//! - [`PersistentListSet`]: insertion-ordered, linear membership test
//! - [`PersistentHashSet`]: hash-table backed
//! - [`PersistentTreeSet`]: sorted, B-tree backed
//! - [`PersistentBitSet`]: `usize` elements packed into sparse 64-bit words
//!
//! # Cross-kind equality
//!
//! Equality only looks at content, so sets of different kinds compare equal
//! when they hold the same elements, and they hash identically too.
//!
//! ```rust
//! use setwise::persistent::{PersistentBitSet, PersistentHashSet, PersistentTreeSet};
//! use setwise::set::Set;
//!
//! let tree: PersistentTreeSet<usize> = [3, 1, 2].into_iter().collect();
//! let hash: PersistentHashSet<usize> = [1, 2, 3].into_iter().collect();
//! let bits: PersistentBitSet = [2, 3, 1].into_iter().collect();
//!
//! assert_eq!(tree, hash);
//! assert_eq!(hash, bits);
//! assert_eq!(tree.hash_code(), bits.hash_code());
//! ```
//!
//! # Set algebra
//!
//! ```rust
//! use setwise::persistent::PersistentListSet;
//! use setwise::set::Set;
//!
//! let set_a: PersistentListSet<i32> = [1, 2].into_iter().collect();
//! let set_b: PersistentListSet<i32> = [2, 3].into_iter().collect();
//!
//! let expected: PersistentListSet<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(set_a.union(&set_b), expected);
//! assert_eq!(&set_a & &set_b, PersistentListSet::singleton(2));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, and every set
/// kind is `Send + Sync` for thread-safe elements.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod bit_set;
mod error;
mod hash_set;
mod list_set;
mod tree_set;

pub use bit_set::PersistentBitSet;
pub use bit_set::PersistentBitSetIntoIterator;
pub use bit_set::PersistentBitSetIterator;
pub use error::DuplicateElementError;
pub use hash_set::PersistentHashSet;
pub use hash_set::PersistentHashSetIntoIterator;
pub use hash_set::PersistentHashSetIterator;
pub use list_set::PersistentListSet;
pub use list_set::PersistentListSetIntoIterator;
pub use list_set::PersistentListSetIterator;
pub use tree_set::PersistentTreeSet;
pub use tree_set::PersistentTreeSetIntoIterator;
pub use tree_set::PersistentTreeSetIterator;
pub use tree_set::PersistentTreeSetRangeIterator;

// =============================================================================
// Cross-kind Equality
// =============================================================================

/// Implements `PartialEq` in both directions between two generic kinds.
macro_rules! impl_cross_kind_equality {
    ($left:ident, $right:ident, [$($bounds:tt)+]) => {
        impl<T: $($bounds)+> PartialEq<$right<T>> for $left<T> {
            fn eq(&self, other: &$right<T>) -> bool {
                crate::set::Set::set_equals(self, other)
            }
        }

        impl<T: $($bounds)+> PartialEq<$left<T>> for $right<T> {
            fn eq(&self, other: &$left<T>) -> bool {
                crate::set::Set::set_equals(self, other)
            }
        }
    };
}

/// Implements `PartialEq` in both directions between a generic kind holding
/// `usize` and [`PersistentBitSet`].
macro_rules! impl_bit_set_equality {
    ($kind:ident) => {
        impl PartialEq<PersistentBitSet> for $kind<usize> {
            fn eq(&self, other: &PersistentBitSet) -> bool {
                crate::set::Set::set_equals(self, other)
            }
        }

        impl PartialEq<$kind<usize>> for PersistentBitSet {
            fn eq(&self, other: &$kind<usize>) -> bool {
                crate::set::Set::set_equals(self, other)
            }
        }
    };
}

impl_cross_kind_equality!(PersistentListSet, PersistentHashSet, [Clone + Eq + std::hash::Hash]);
impl_cross_kind_equality!(PersistentListSet, PersistentTreeSet, [Clone + Ord]);
impl_cross_kind_equality!(PersistentHashSet, PersistentTreeSet, [Clone + Ord + std::hash::Hash]);

impl_bit_set_equality!(PersistentListSet);
impl_bit_set_equality!(PersistentHashSet);
impl_bit_set_equality!(PersistentTreeSet);

// =============================================================================
// Serde Support
// =============================================================================

/// Deserializes any set kind from a sequence, collapsing duplicates.
#[cfg(feature = "serde")]
pub(crate) struct SetVisitor<S, T> {
    marker: std::marker::PhantomData<(S, T)>,
}

#[cfg(feature = "serde")]
impl<S, T> SetVisitor<S, T> {
    pub(crate) const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, S, T> serde::de::Visitor<'de> for SetVisitor<S, T>
where
    T: serde::Deserialize<'de>,
    S: FromIterator<T>,
{
    type Value = S;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Bounded preallocation: the hint comes from untrusted input. The
        // collect below still dedupes at the kind's own cost, quadratic for
        // the list kind.
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

/// Serializes `elements` as a sequence of `length` items.
#[cfg(feature = "serde")]
pub(crate) fn serialize_elements<S, I>(
    serializer: S,
    length: usize,
    elements: I,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    I: IntoIterator,
    I::Item: serde::Serialize,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(length))?;
    for element in elements {
        seq.serialize_element(&element)?;
    }
    seq.end()
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
mod arc_send_sync_verification {
    use super::{PersistentBitSet, PersistentHashSet, PersistentListSet, PersistentTreeSet};

    static_assertions::assert_impl_all!(PersistentListSet<String>: Send, Sync);
    static_assertions::assert_impl_all!(PersistentHashSet<String>: Send, Sync);
    static_assertions::assert_impl_all!(PersistentTreeSet<String>: Send, Sync);
    static_assertions::assert_impl_all!(PersistentBitSet: Send, Sync);
}

#[cfg(not(feature = "arc"))]
mod rc_send_sync_verification {
    use super::{PersistentBitSet, PersistentHashSet, PersistentListSet, PersistentTreeSet};

    static_assertions::assert_not_impl_any!(PersistentListSet<i32>: Send, Sync);
    static_assertions::assert_not_impl_any!(PersistentHashSet<i32>: Send, Sync);
    static_assertions::assert_not_impl_any!(PersistentTreeSet<i32>: Send, Sync);
    static_assertions::assert_not_impl_any!(PersistentBitSet: Send, Sync);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone_shares_allocation() {
        let reference_counter: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        let reference_counter_clone = reference_counter.clone();
        assert!(ReferenceCounter::ptr_eq(
            &reference_counter,
            &reference_counter_clone
        ));
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
    }
}

#[cfg(test)]
mod cross_kind_tests {
    use super::*;
    use crate::set::Set;
    use rstest::rstest;

    #[rstest]
    fn test_list_and_hash_sets_compare_both_ways() {
        let list: PersistentListSet<i32> = [1, 2, 3].into_iter().collect();
        let hash: PersistentHashSet<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(list, hash);
        assert_eq!(hash, list);
    }

    #[rstest]
    fn test_tree_and_list_sets_differ_on_content() {
        let list: PersistentListSet<i32> = [1, 2].into_iter().collect();
        let tree: PersistentTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert_ne!(list, tree);
        assert_ne!(tree, list);
        assert!(list.subset_of(&tree));
    }

    #[rstest]
    fn test_bit_set_matches_every_generic_kind() {
        let bits: PersistentBitSet = [0, 64, 130].into_iter().collect();
        let list: PersistentListSet<usize> = [130, 0, 64].into_iter().collect();
        let hash: PersistentHashSet<usize> = [64, 130, 0].into_iter().collect();
        let tree: PersistentTreeSet<usize> = [0, 130, 64].into_iter().collect();

        assert_eq!(bits, list);
        assert_eq!(hash, bits);
        assert_eq!(bits, tree);
        assert_eq!(bits.hash_code(), list.hash_code());
        assert_eq!(hash.hash_code(), tree.hash_code());
    }

    #[rstest]
    fn test_cross_kind_union_keeps_receiver_kind() {
        let tree: PersistentTreeSet<usize> = [5, 1].into_iter().collect();
        let bits: PersistentBitSet = [3, 1].into_iter().collect();

        let union: PersistentTreeSet<usize> = tree.union(&bits);
        let elements: Vec<&usize> = union.iter().collect();
        assert_eq!(elements, vec![&1, &3, &5]);
    }
}
