//! Order-independent hashing for unordered collections.
//!
//! The hash of an unordered collection must not depend on the order in which
//! its elements are enumerated. [`UnorderedHasher`] achieves this by folding
//! every element code into three commutative accumulators (sum, xor and
//! product of nonzero codes) plus a count. Only those accumulators are then
//! mixed, always in the same sequence:
//!
//! ```text
//! seed -> mix(sum) -> mix(xor) -> mix_last(product) -> finalize(count)
//! ```
//!
//! Plain xor or plain sum alone cancel too easily (`{a, a}` style collisions
//! and additive collisions); combining three of them keeps the result
//! commutative without being trivially collidable.
//!
//! # Seeds
//!
//! The seed namespaces the hash: a set and a bag holding the same codes hash
//! differently because they start from [`SET_SEED`] and [`BAG_SEED`].

use super::murmur::{finalize_hash, mix, mix_last};

/// Classic 31-multiplier string hash of `token`, evaluated at compile time.
///
/// `s[0] * 31^(n - 1) + s[1] * 31^(n - 2) + ... + s[n - 1]`, wrapping.
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::string_seed;
///
/// assert_eq!(string_seed(""), 0);
/// assert_eq!(string_seed("a"), 97);
/// assert_eq!(string_seed("Set"), 83_010);
/// ```
#[must_use]
pub const fn string_seed(token: &str) -> u32 {
    let bytes = token.as_bytes();
    let mut hash: u32 = 0;
    let mut index = 0;
    while index < bytes.len() {
        hash = hash.wrapping_mul(31).wrapping_add(bytes[index] as u32);
        index += 1;
    }
    hash
}

/// Seed for set hash codes.
pub const SET_SEED: u32 = string_seed("Set");

/// Seed for map hash codes (a map hashes its entries as an unordered collection).
pub const MAP_SEED: u32 = string_seed("Map");

/// Seed for bag (multiset) hash codes.
pub const BAG_SEED: u32 = string_seed("Bag");

/// Streaming accumulator for an order-independent hash code.
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::{UnorderedHasher, SET_SEED};
///
/// let mut forward = UnorderedHasher::new(SET_SEED);
/// forward.write(1);
/// forward.write(2);
/// forward.write(3);
///
/// let mut backward = UnorderedHasher::new(SET_SEED);
/// backward.write(3);
/// backward.write(2);
/// backward.write(1);
///
/// assert_eq!(forward.finish(), backward.finish());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnorderedHasher {
    seed: u32,
    sum: u32,
    xor: u32,
    product: u32,
    count: u32,
}

impl UnorderedHasher {
    /// Creates an accumulator with nothing written yet.
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            seed,
            sum: 0,
            xor: 0,
            product: 1,
            count: 0,
        }
    }

    /// Folds one element hash code into the accumulators.
    ///
    /// A code of exactly zero is left out of the product, so it cannot
    /// collapse the product to zero.
    #[inline]
    pub const fn write(&mut self, code: u32) {
        self.sum = self.sum.wrapping_add(code);
        self.xor ^= code;
        if code != 0 {
            self.product = self.product.wrapping_mul(code);
        }
        self.count = self.count.wrapping_add(1);
    }

    /// Number of codes written so far.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.count
    }

    /// Returns `true` if nothing has been written.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Produces the hash code for everything written so far.
    ///
    /// The accumulator is not consumed; more codes may be written afterwards.
    #[inline]
    #[must_use]
    pub const fn finish(&self) -> u32 {
        let mut hash = self.seed;
        hash = mix(hash, self.sum);
        hash = mix(hash, self.xor);
        hash = mix_last(hash, self.product);
        finalize_hash(hash, self.count)
    }
}

impl Extend<u32> for UnorderedHasher {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, codes: I) {
        for code in codes {
            self.write(code);
        }
    }
}

/// Hashes a collection of element hash codes without regard to their order.
///
/// # Arguments
///
/// * `codes` - The per-element hash codes, in any order
/// * `seed` - Namespace of the collection kind, such as [`SET_SEED`]
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::{unordered_hash, BAG_SEED, SET_SEED};
///
/// assert_eq!(
///     unordered_hash([10, 20, 30], SET_SEED),
///     unordered_hash([30, 10, 20], SET_SEED),
/// );
/// assert_ne!(
///     unordered_hash([10, 20, 30], SET_SEED),
///     unordered_hash([10, 20, 30], BAG_SEED),
/// );
/// ```
#[must_use]
pub fn unordered_hash<I>(codes: I, seed: u32) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut hasher = UnorderedHasher::new(seed);
    hasher.extend(codes);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::murmur::{finalize_hash, mix, mix_last};
    use rstest::rstest;

    #[rstest]
    fn test_seeds_are_distinct() {
        assert_ne!(SET_SEED, MAP_SEED);
        assert_ne!(SET_SEED, BAG_SEED);
        assert_ne!(MAP_SEED, BAG_SEED);
    }

    #[rstest]
    fn test_set_seed_matches_token_hash() {
        // 'S' * 31^2 + 'e' * 31 + 't'
        assert_eq!(SET_SEED, 83 * 961 + 101 * 31 + 116);
    }

    #[rstest]
    fn test_empty_input_depends_on_seed_only() {
        let expected = finalize_hash(mix_last(mix(mix(SET_SEED, 0), 0), 1), 0);
        assert_eq!(unordered_hash(std::iter::empty(), SET_SEED), expected);
        assert_eq!(UnorderedHasher::new(SET_SEED).finish(), expected);
    }

    #[rstest]
    fn test_zero_code_is_not_the_empty_hash() {
        let empty = unordered_hash(std::iter::empty(), SET_SEED);
        let single_zero = unordered_hash([0], SET_SEED);
        assert_ne!(empty, single_zero);
    }

    #[rstest]
    fn test_zero_code_does_not_collapse_product() {
        let mut with_zero = UnorderedHasher::new(SET_SEED);
        with_zero.extend([0, 7, 11]);
        assert_eq!(with_zero.product, 77);
        assert_eq!(with_zero.sum, 18);
        assert_eq!(with_zero.len(), 3);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![3, 2, 1])]
    #[case(vec![5, 0, 9, 12], vec![12, 9, 0, 5])]
    #[case(vec![u32::MAX, 1], vec![1, u32::MAX])]
    fn test_order_independent(#[case] left: Vec<u32>, #[case] right: Vec<u32>) {
        assert_eq!(
            unordered_hash(left, SET_SEED),
            unordered_hash(right, SET_SEED)
        );
    }

    #[rstest]
    fn test_xor_cancellation_is_not_a_collision() {
        // xor alone would hash {a, a} like {}; the count and sum tell them apart.
        let pair = unordered_hash([42, 42], BAG_SEED);
        let empty = unordered_hash(std::iter::empty(), BAG_SEED);
        assert_ne!(pair, empty);
    }

    #[rstest]
    fn test_finish_does_not_consume() {
        let mut hasher = UnorderedHasher::new(MAP_SEED);
        hasher.write(1);
        let first = hasher.finish();
        assert_eq!(first, hasher.finish());
        hasher.write(2);
        assert_ne!(first, hasher.finish());
        assert!(!hasher.is_empty());
    }
}
