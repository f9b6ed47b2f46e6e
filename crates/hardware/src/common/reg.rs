//! Accumulator Machine Register File.
//!
//! This module provides the `RegisterFile` struct holding the five registers of
//! the hypothetical accumulator CPU. It provides:
//! 1. **Naming:** The `Register` enum, used to report which registers a micro-step touched.
//! 2. **Storage:** 16-bit registers addressed either by field or by `Register`.
//! 3. **Observability:** A compact dump of all registers for traces and the CLI.

use std::fmt;

use serde::Serialize;

/// Names of the CPU registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    /// Accumulator.
    Ac,
    /// Program counter.
    Pc,
    /// Instruction register.
    Ir,
    /// Memory address register.
    Mar,
    /// Memory buffer register.
    Mbr,
}

impl Register {
    /// Every register, in display order.
    pub const ALL: [Self; 5] = [Self::Ac, Self::Pc, Self::Ir, Self::Mar, Self::Mbr];

    /// Short upper-case name (`"AC"`, `"PC"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Pc => "PC",
            Self::Ir => "IR",
            Self::Mar => "MAR",
            Self::Mbr => "MBR",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The CPU register set. All registers reset to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    /// Accumulator.
    pub ac: u16,
    /// Program counter.
    pub pc: u16,
    /// Instruction register.
    pub ir: u16,
    /// Memory address register.
    pub mar: u16,
    /// Memory buffer register.
    pub mbr: u16,
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub const fn new() -> Self {
        Self {
            ac: 0,
            pc: 0,
            ir: 0,
            mar: 0,
            mbr: 0,
        }
    }

    /// Reads a register by name.
    pub const fn read(&self, reg: Register) -> u16 {
        match reg {
            Register::Ac => self.ac,
            Register::Pc => self.pc,
            Register::Ir => self.ir,
            Register::Mar => self.mar,
            Register::Mbr => self.mbr,
        }
    }

    /// Writes a register by name.
    pub fn write(&mut self, reg: Register, val: u16) {
        match reg {
            Register::Ac => self.ac = val,
            Register::Pc => self.pc = val,
            Register::Ir => self.ir = val,
            Register::Mar => self.mar = val,
            Register::Mbr => self.mbr = val,
        }
    }

    /// Clears every register to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Renders all registers on one line, e.g. `AC=0x0005 PC=0x0001 ...`.
    pub fn dump(&self) -> String {
        Register::ALL
            .iter()
            .map(|&reg| format!("{reg}={:#06x}", self.read(reg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
