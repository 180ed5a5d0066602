//! Per-element hash codes.
//!
//! Unordered hashing needs one 32-bit code per element, and that code must be
//! the same no matter which set kind holds the element or which process
//! computed it. [`ElementHasher`] is therefore a deterministic
//! [`BuildHasher`]: never a randomly keyed one.
//!
//! The hasher is selected at compile time:
//!
//! - default: `DefaultHasher` (SipHash with zero keys)
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature: `ahash::RandomState` with fixed seeds
//!
//! When both alternative features are enabled, `fxhash` wins.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use super::unordered::UnorderedHasher;

/// The deterministic hasher used for element hash codes.
#[cfg(feature = "fxhash")]
pub type ElementHasher = rustc_hash::FxBuildHasher;

/// The deterministic hasher used for element hash codes.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type ElementHasher = ahash::RandomState;

/// The deterministic hasher used for element hash codes.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type ElementHasher =
    std::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

/// Returns the element hasher.
///
/// Always use this instead of `ElementHasher::default()`: with the `ahash`
/// feature the default state is randomly keyed.
#[cfg(feature = "fxhash")]
#[inline]
#[must_use]
pub const fn element_hasher() -> ElementHasher {
    rustc_hash::FxBuildHasher
}

/// Returns the element hasher.
///
/// Always use this instead of `ElementHasher::default()`: with the `ahash`
/// feature the default state is randomly keyed.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[inline]
#[must_use]
pub fn element_hasher() -> ElementHasher {
    ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

/// Returns the element hasher.
///
/// Always use this instead of `ElementHasher::default()`: with the `ahash`
/// feature the default state is randomly keyed.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
#[inline]
#[must_use]
pub fn element_hasher() -> ElementHasher {
    ElementHasher::default()
}

/// Computes the 32-bit hash code of a single element.
///
/// The 64-bit hasher output is folded by xoring its halves.
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::element_hash;
///
/// assert_eq!(element_hash(&"alpha"), element_hash(&"alpha"));
/// assert_eq!(element_hash(&42_u64), element_hash(&42_u64));
/// ```
#[must_use]
pub fn element_hash<T: Hash + ?Sized>(element: &T) -> u32 {
    let full = element_hasher().hash_one(element);
    #[allow(clippy::cast_possible_truncation)]
    let folded = (full ^ (full >> 32)) as u32;
    folded
}

/// Hashes a collection of elements without regard to their order.
///
/// Each element is hashed with [`element_hash`] and the codes are combined
/// with [`unordered_hash`](super::unordered_hash).
///
/// # Examples
///
/// ```rust
/// use setwise::hashing::{unordered_hash_of, SET_SEED};
///
/// let forward = unordered_hash_of::<i32, _>(&[1, 2, 3], SET_SEED);
/// let backward = unordered_hash_of::<i32, _>(&[3, 1, 2], SET_SEED);
/// assert_eq!(forward, backward);
/// ```
#[must_use]
pub fn unordered_hash_of<T, I>(elements: I, seed: u32) -> u32
where
    T: Hash + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut hasher = UnorderedHasher::new(seed);
    for element in elements {
        hasher.write(element_hash::<T>(element.borrow()));
    }
    hasher.finish()
}
