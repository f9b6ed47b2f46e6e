//! Memory units.
//!
//! This module contains the cache engine: address decomposition, line storage
//! for each mapping policy, and LRU victim selection.

/// Cache engine with direct, set-associative, and fully-associative mapping.
pub mod cache;
