//! Simulation engines.
//!
//! This module contains the two independent engines: the accumulator CPU
//! that walks the fetch-decode-execute cycle, and the cache unit that
//! classifies and services memory accesses under a mapping policy.

/// CPU engine (registers, memory, instruction cycle).
pub mod cpu;

/// Memory units (the cache engine and its replacement policies).
pub mod units;

pub use self::cpu::CpuEngine;
pub use self::units::cache::CacheEngine;
