//! Global Simulator Constants.
//!
//! This module defines the fixed dimensions shared by both engines. It includes:
//! 1. **CPU Constants:** Memory size, instruction word layout, and cycle phases.
//! 2. **Cache Constants:** Backing memory size, cache geometry, and address field widths.

/// Number of words in the CPU engine's memory.
pub const CPU_MEMORY_WORDS: usize = 16;

/// Longest program the CPU engine keeps; PC is 16 bits and must be able to reach the end.
pub const MAX_PROGRAM_LEN: usize = u16::MAX as usize;

/// Number of micro-steps (fetch, decode, execute) per instruction.
pub const PHASES_PER_INSTRUCTION: usize = 3;

/// Bit position of the opcode nibble in an instruction word.
pub const OPCODE_SHIFT: u16 = 12;

/// Bit mask for extracting the opcode nibble from an instruction word.
pub const OPCODE_MASK: u16 = 0xF000;

/// Bit mask for extracting the operand address from an instruction word.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Default demonstration data seeded into CPU memory after a program load.
pub const DEMO_DATA: [(usize, u16); 2] = [(10, 5), (11, 3)];

/// Number of words in the cache engine's backing memory.
pub const BACKING_MEMORY_WORDS: usize = 64;

/// Width of a cache engine address in bits.
pub const ADDRESS_BITS: u32 = 6;

/// Total number of cache lines, regardless of mapping policy.
pub const CACHE_LINES: usize = 8;

/// Number of sets in the set-associative organisation.
pub const CACHE_SETS: usize = 4;

/// Number of ways per set in the set-associative organisation.
pub const CACHE_WAYS: usize = 2;

/// Index width for direct mapping (selects one of 8 lines).
pub const DIRECT_INDEX_BITS: u32 = 3;

/// Tag width for direct mapping.
pub const DIRECT_TAG_BITS: u32 = 3;

/// Index width for set-associative mapping (selects one of 4 sets).
pub const SET_INDEX_BITS: u32 = 2;

/// Tag width for set-associative mapping.
pub const SET_TAG_BITS: u32 = 4;
