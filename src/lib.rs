#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A key-value map backed by open addressing with linear probing.
///
/// This module provides [`ProbeMap`], which owns a flat slot array and
/// delegates all slot addressing to the probing policy, plus its entry API,
/// iterators, and error type.
pub mod probe_map;

pub mod probe;

/// The slot model: one array element holding a key and an optionally-present
/// owned value, whose absence marks the slot empty.
pub mod slot;

pub use probe_map::DefaultHashBuilder;
pub use probe_map::Entry;
pub use probe_map::NotFound;
pub use probe_map::ProbeMap;
