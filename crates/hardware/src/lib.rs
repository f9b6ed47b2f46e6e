//! Computer architecture teaching simulator library.
//!
//! This crate implements two small, independent machines meant to be stepped
//! through and inspected:
//! 1. **CPU:** An accumulator machine (AC, PC, IR, MAR, MBR) with a 16-word memory,
//!    executing LOAD/STORE/ADD one fetch, decode, or execute micro-step at a time.
//! 2. **Cache:** An eight-line cache in front of a 64-word memory with direct,
//!    set-associative, or fully-associative mapping and LRU replacement.
//! 3. **ISA:** Assembly parsing, 16-bit instruction encoding, decoding, and disassembly.
//! 4. **Simulation:** JSON configuration, source loading, counters, and event logs.
//!
//! Every operation reports what it did as structured data (`StepOutcome`,
//! `AccessOutcome`) whose `Display` renders a human-readable explanation.

/// Common types and constants (registers, errors, event log).
pub mod common;
/// Simulator configuration (defaults, mapping policy, JSON loading).
pub mod config;
/// The CPU engine and the cache engine.
pub mod core;
/// Instruction set (mnemonics, encoding, decoding, assembly parsing).
pub mod isa;
/// Source loading and the combined simulator.
pub mod sim;
/// Counters for both engines.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Accumulator CPU; load a program, then `step()`.
pub use crate::core::CpuEngine;
/// Teaching cache; pick a policy, then `access()`.
pub use crate::core::CacheEngine;
/// Both engines built from one `Config`.
pub use crate::sim::Simulator;
