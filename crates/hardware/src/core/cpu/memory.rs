//! CPU Main Memory.
//!
//! A fixed array of 16-bit words holding both encoded instructions and operand
//! data. Addresses come straight from `MAR`, which can hold any 12-bit operand,
//! so reads and writes past the end are reported to the caller instead of
//! panicking.

use serde::Serialize;

use crate::common::constants::CPU_MEMORY_WORDS;

/// The CPU engine's word-addressed memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Memory {
    cells: [u16; CPU_MEMORY_WORDS],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; CPU_MEMORY_WORDS],
        }
    }

    /// Number of cells.
    pub const fn len(&self) -> usize {
        CPU_MEMORY_WORDS
    }

    /// Always false; memory has a fixed, non-zero size.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads a cell, `None` if `addr` is past the end.
    pub fn read(&self, addr: usize) -> Option<u16> {
        self.cells.get(addr).copied()
    }

    /// Writes a cell. Returns `false` (and changes nothing) if `addr` is past the end.
    pub fn write(&mut self, addr: usize, val: u16) -> bool {
        self.cells.get_mut(addr).map(|cell| *cell = val).is_some()
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells = [0; CPU_MEMORY_WORDS];
    }

    /// All cells, lowest address first.
    pub const fn cells(&self) -> &[u16; CPU_MEMORY_WORDS] {
        &self.cells
    }
}
