//! MurmurHash3 (32-bit) step functions.
//!
//! These are the building blocks the unordered hash is finalized with. They
//! are exposed so that other collection kinds can build their own hash
//! codes from the same primitives.
//!
//! All arithmetic wraps on overflow.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Mixes `data` into `hash` and scrambles the result.
///
/// Use this for every value except the last one fed into a hash; the last
/// value goes through [`mix_last`].
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::{mix, mix_last};
///
/// // `mix` is `mix_last` followed by a rotation and a multiply-add,
/// // so the two disagree for almost every input.
/// assert_ne!(mix(0, 42), mix_last(0, 42));
/// ```
#[inline]
#[must_use]
pub const fn mix(hash: u32, data: u32) -> u32 {
    let mixed = mix_last(hash, data).rotate_left(13);
    mixed.wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// Mixes the final value `data` into `hash`.
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::mix_last;
///
/// // Mixing zero data leaves the hash unchanged.
/// assert_eq!(mix_last(1234, 0), 1234);
/// ```
#[inline]
#[must_use]
pub const fn mix_last(hash: u32, data: u32) -> u32 {
    let mut k = data.wrapping_mul(C1);
    k = k.rotate_left(15);
    k = k.wrapping_mul(C2);
    hash ^ k
}

/// Finalizes `hash` with the number of values that were mixed into it.
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::{avalanche, finalize_hash};
///
/// assert_eq!(finalize_hash(7, 3), avalanche(7 ^ 3));
/// ```
#[inline]
#[must_use]
pub const fn finalize_hash(hash: u32, length: u32) -> u32 {
    avalanche(hash ^ length)
}

/// Forces every input bit to affect every output bit.
#[inline]
#[must_use]
pub const fn avalanche(hash: u32) -> u32 {
    let mut h = hash;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_avalanche_of_zero_is_zero() {
        assert_eq!(avalanche(0), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(0x8000_0000)]
    fn test_avalanche_spreads_single_bits(#[case] input: u32) {
        let output = avalanche(input);
        assert_ne!(output, input);
        assert!(output.count_ones() > 4);
    }

    #[rstest]
    fn test_mix_last_with_zero_data_is_identity() {
        assert_eq!(mix_last(0xdead_beef, 0), 0xdead_beef);
    }

    #[rstest]
    fn test_mix_is_order_sensitive() {
        let forward = mix(mix(0, 1), 2);
        let backward = mix(mix(0, 2), 1);
        assert_ne!(forward, backward);
    }

    #[rstest]
    fn test_finalize_hash_depends_on_length() {
        assert_ne!(finalize_hash(99, 0), finalize_hash(99, 1));
    }
}
