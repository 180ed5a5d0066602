//! Order-independent hashing.
//!
//! This module provides the hash function every set kind uses for its hash
//! code, and exposes it as a reusable primitive for other unordered
//! collection kinds (bags, maps):
//!
//! - [`unordered_hash`] / [`UnorderedHasher`]: combine per-element codes
//!   into one code that ignores enumeration order
//! - [`element_hash`]: the deterministic per-element code
//! - [`unordered_hash_of`]: both of the above in one call
//! - [`SET_SEED`], [`MAP_SEED`], [`BAG_SEED`]: namespaces per collection kind
//! - [`mix`], [`mix_last`], [`finalize_hash`], [`avalanche`]: MurmurHash3
//!   step functions
//!
//! # Examples
//!
//! ```rust
//! use setwise::hashing::{unordered_hash_of, BAG_SEED, SET_SEED};
//!
//! let words = ["apple", "pear", "plum"];
//! let shuffled = ["plum", "apple", "pear"];
//!
//! assert_eq!(
//!     unordered_hash_of::<&str, _>(&words, SET_SEED),
//!     unordered_hash_of::<&str, _>(&shuffled, SET_SEED),
//! );
//!
//! // A different seed puts the same elements in a different namespace.
//! assert_ne!(
//!     unordered_hash_of::<&str, _>(&words, SET_SEED),
//!     unordered_hash_of::<&str, _>(&words, BAG_SEED),
//! );
//! ```

mod element;
mod murmur;
mod unordered;

pub use element::{ElementHasher, element_hash, element_hasher, unordered_hash_of};
pub use murmur::{avalanche, finalize_hash, mix, mix_last};
pub use unordered::{BAG_SEED, MAP_SEED, SET_SEED, UnorderedHasher, string_seed, unordered_hash};
