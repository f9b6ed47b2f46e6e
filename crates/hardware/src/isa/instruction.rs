//! Parsed instruction records and instruction word encoding.

use serde::Serialize;

use crate::common::constants::{ADDRESS_MASK, OPCODE_SHIFT};
use crate::isa::opcodes::Opcode;

/// One non-blank line of program source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Upper-cased mnemonic as written (may be unrecognized).
    pub mnemonic: String,
    /// Operand address as written; 0 when missing or unparsable.
    pub operand_address: i64,
    /// Zero-based source line, which is also the memory cell the word is loaded into.
    pub source_line: usize,
}

impl Instruction {
    /// The operation named by the mnemonic, if recognized.
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_mnemonic(&self.mnemonic)
    }

    /// The 16-bit instruction word. Unrecognized mnemonics encode to 0.
    pub fn encode(&self) -> u16 {
        self.opcode()
            .map_or(0, |op| encode(op, self.operand_address))
    }
}

/// Packs an opcode and operand address into an instruction word.
///
/// Only the low 12 bits of `address` are kept; no range check is made
/// against the size of memory.
pub const fn encode(op: Opcode, address: i64) -> u16 {
    (op.bits() << OPCODE_SHIFT) | (address as u16 & ADDRESS_MASK)
}
