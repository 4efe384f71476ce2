#![cfg_attr(not(feature = "std"), no_std)]

//! djb2-xor: a non-cryptographic string hash, and the statistical harness
//! used to examine it (distribution, collisions, avalanche and throughput).
//!
//! **Not cryptographically secure.**
//!
//! Hash values are 64 bits wide and wrap modulo 2^64. The [reference] module
//! keeps the unbounded-precision variant for comparison.

extern crate alloc;

pub mod avalanche;
pub mod collision;
pub mod distribution;
pub mod hamming;
pub mod hash;
pub mod reference;
pub mod sample;

#[cfg(feature = "std")]
pub mod harness;
#[cfg(feature = "std")]
pub mod report;
#[cfg(feature = "std")]
pub mod throughput;

pub use hash::{djb2_xor, Djb2Xor, HashValue, HASH_BITS};
