#![cfg(feature = "persistent")]
//! Property-based tests for the set contract.
//!
//! Every law is checked for each persistent set kind, and across kinds where
//! the law relates two sets. Elements are drawn from a small range so that
//! generated sets overlap often; the bit set also gets a law over the whole
//! `usize` range.

use setwise::persistent::{PersistentBitSet, PersistentHashSet, PersistentListSet, PersistentTreeSet};
use setwise::set::{Iterable, Membership, SameKind, Set};
use proptest::prelude::*;

fn element_vec() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..200, 0..40)
}

/// Generates one proptest module per set kind, each checking every law of
/// the contract against sets of that kind.
macro_rules! set_contract_laws {
    ($module:ident, $kind:ty) => {
        mod $module {
            use super::*;

            fn build(elements: &[usize]) -> $kind {
                elements.iter().copied().collect()
            }

            // =================================================================
            // Reflexivity Law
            // Description: every set equals itself
            // =================================================================

            proptest! {
                #[test]
                fn prop_equality_is_reflexive(elements in element_vec()) {
                    let set = build(&elements);
                    let copy = set.clone();

                    prop_assert!(set.set_equals(&set));
                    prop_assert!(set.set_equals(&copy));
                    prop_assert_eq!(set, copy);
                }
            }

            // =================================================================
            // Commutativity Law
            // Description: A == B if and only if B == A
            // =================================================================

            proptest! {
                #[test]
                fn prop_equality_is_commutative(
                    elements_a in element_vec(),
                    elements_b in element_vec()
                ) {
                    let set_a = build(&elements_a);
                    let set_b = build(&elements_b);

                    prop_assert_eq!(set_a.set_equals(&set_b), set_b.set_equals(&set_a));
                }
            }

            // =================================================================
            // Hash Consistency Law
            // Description: A == B implies hash(A) == hash(B)
            // =================================================================

            proptest! {
                #[test]
                fn prop_equal_sets_hash_alike(
                    elements_a in element_vec(),
                    elements_b in element_vec()
                ) {
                    let set_a = build(&elements_a);
                    let set_b = build(&elements_b);

                    if set_a.set_equals(&set_b) {
                        prop_assert_eq!(set_a.hash_code(), set_b.hash_code());
                    }
                }
            }

            // =================================================================
            // Order Independence Law
            // Description: insertion order changes neither equality nor hash
            // =================================================================

            proptest! {
                #[test]
                fn prop_insertion_order_is_irrelevant(elements in element_vec()) {
                    let forward = build(&elements);
                    let reversed: Vec<usize> = elements.iter().rev().copied().collect();
                    let backward = build(&reversed);

                    prop_assert!(forward.set_equals(&backward));
                    prop_assert_eq!(forward.hash_code(), backward.hash_code());
                }
            }

            // =================================================================
            // Union Identity Law
            // Description: A | empty == A
            // =================================================================

            proptest! {
                #[test]
                fn prop_union_with_empty_is_identity(elements in element_vec()) {
                    let set = build(&elements);
                    let empty = set.empty();

                    prop_assert!(set.union(&empty).set_equals(&set));
                    prop_assert!(empty.union(&set).set_equals(&set));
                    prop_assert!(Iterable::is_empty(&empty));
                }
            }

            // =================================================================
            // Intersection Absorption Law
            // Description: A & B is a subset of both A and B
            // =================================================================

            proptest! {
                #[test]
                fn prop_intersection_is_subset_of_both(
                    elements_a in element_vec(),
                    elements_b in element_vec()
                ) {
                    let set_a = build(&elements_a);
                    let set_b = build(&elements_b);
                    let intersection = set_a.intersect(&set_b);

                    prop_assert!(intersection.subset_of(&set_a));
                    prop_assert!(intersection.subset_of(&set_b));
                }
            }

            // =================================================================
            // Union Containment Law
            // Description: e in A or e in B implies e in A | B
            // =================================================================

            proptest! {
                #[test]
                fn prop_union_contains_both_operands(
                    elements_a in element_vec(),
                    elements_b in element_vec(),
                    candidate in 0usize..200
                ) {
                    let set_a = build(&elements_a);
                    let set_b = build(&elements_b);
                    let union = set_a.union(&set_b);

                    if Membership::contains(&set_a, &candidate) || Membership::contains(&set_b, &candidate) {
                        prop_assert!(Membership::contains(&union, &candidate));
                    }
                    prop_assert!(set_a.subset_of(&union));
                    prop_assert!(set_b.subset_of(&union));
                }
            }

            // =================================================================
            // Operator Law
            // Description: | and & agree with union and intersect
            // =================================================================

            proptest! {
                #[test]
                fn prop_operators_match_named_methods(
                    elements_a in element_vec(),
                    elements_b in element_vec()
                ) {
                    let set_a = build(&elements_a);
                    let set_b = build(&elements_b);

                    prop_assert_eq!(&set_a | &set_b, set_a.union(&set_b));
                    prop_assert_eq!(&set_a & &set_b, set_a.intersect(&set_b));
                }
            }

            // =================================================================
            // Size Law
            // Description: size counts distinct elements
            // =================================================================

            proptest! {
                #[test]
                fn prop_size_counts_distinct_elements(elements in element_vec()) {
                    let set = build(&elements);
                    let distinct: std::collections::BTreeSet<usize> =
                        elements.iter().copied().collect();

                    prop_assert_eq!(set.size(), distinct.len());
                    prop_assert_eq!(set.iter().count(), distinct.len());
                }
            }
        }
    };
}

set_contract_laws!(list_set_laws, PersistentListSet<usize>);
set_contract_laws!(hash_set_laws, PersistentHashSet<usize>);
set_contract_laws!(tree_set_laws, PersistentTreeSet<usize>);
set_contract_laws!(bit_set_laws, PersistentBitSet);

// =============================================================================
// Cross-kind Agreement
// Description: equal content means equal sets and equal hashes, whatever the kind
// =============================================================================

proptest! {
    #[test]
    fn prop_all_kinds_agree_on_equality_and_hash(elements in element_vec()) {
        let list: PersistentListSet<usize> = elements.iter().copied().collect();
        let hash: PersistentHashSet<usize> = elements.iter().copied().collect();
        let tree: PersistentTreeSet<usize> = elements.iter().rev().copied().collect();
        let bits: PersistentBitSet = elements.iter().copied().collect();

        prop_assert!(list.set_equals(&hash));
        prop_assert!(hash.set_equals(&tree));
        prop_assert!(tree.set_equals(&bits));
        prop_assert!(bits.set_equals(&list));

        prop_assert_eq!(list.hash_code(), hash.hash_code());
        prop_assert_eq!(hash.hash_code(), tree.hash_code());
        prop_assert_eq!(tree.hash_code(), bits.hash_code());
    }
}

proptest! {
    #[test]
    fn prop_cross_kind_equality_is_commutative(
        elements_a in element_vec(),
        elements_b in element_vec()
    ) {
        let list: PersistentListSet<usize> = elements_a.into_iter().collect();
        let bits: PersistentBitSet = elements_b.into_iter().collect();

        prop_assert_eq!(list.set_equals(&bits), bits.set_equals(&list));
        prop_assert_eq!(list == bits, bits == list);
    }
}

proptest! {
    #[test]
    fn prop_cross_kind_union_matches_same_kind_union(
        elements_a in element_vec(),
        elements_b in element_vec()
    ) {
        let tree_a: PersistentTreeSet<usize> = elements_a.iter().copied().collect();
        let tree_b: PersistentTreeSet<usize> = elements_b.iter().copied().collect();
        let bits_b: PersistentBitSet = elements_b.iter().copied().collect();

        prop_assert_eq!(tree_a.union(&bits_b), tree_a.union(&tree_b));
        prop_assert_eq!(tree_a.intersect(&bits_b), tree_a.intersect(&tree_b));
    }
}

// =============================================================================
// Bit Set Over the Full Range
// Description: any usize is a valid bit set element, however large
// =============================================================================

proptest! {
    #[test]
    fn prop_bit_set_matches_tree_set_over_full_range(
        elements_a in prop::collection::vec(any::<usize>(), 0..30),
        elements_b in prop::collection::vec(
            prop_oneof![any::<usize>(), (usize::MAX - 200)..=usize::MAX, 0usize..200],
            0..30
        )
    ) {
        let bits_a: PersistentBitSet = elements_a.iter().copied().collect();
        let bits_b: PersistentBitSet = elements_b.iter().copied().collect();
        let tree_a: PersistentTreeSet<usize> = elements_a.iter().copied().collect();
        let tree_b: PersistentTreeSet<usize> = elements_b.iter().copied().collect();

        prop_assert_eq!(&bits_a, &tree_a);
        prop_assert_eq!(bits_a.hash_code(), tree_a.hash_code());
        prop_assert_eq!(bits_a.first(), tree_a.first().copied());
        prop_assert_eq!(bits_b.last(), tree_b.last().copied());
        prop_assert!(bits_a.union(&bits_b).set_equals(&tree_a.union(&tree_b)));
        prop_assert!(bits_a.intersect(&tree_b).set_equals(&tree_a.intersect(&bits_b)));
        prop_assert!(
            bits_a
                .symmetric_difference(&bits_b)
                .set_equals(&tree_a.symmetric_difference(&tree_b))
        );
    }
}
