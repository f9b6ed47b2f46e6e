//! Instruction Word Decoder.
//!
//! Splits a 16-bit instruction word into its opcode nibble (bits 12-15) and
//! operand address (bits 0-11).

use serde::Serialize;

use crate::common::constants::{ADDRESS_MASK, OPCODE_MASK, OPCODE_SHIFT};
use crate::isa::opcodes::Opcode;

/// Fields of a decoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Raw opcode nibble.
    pub opcode_bits: u16,
    /// Recognized operation, `None` for nibbles outside 1..=3.
    pub opcode: Option<Opcode>,
    /// Operand address.
    pub address: u16,
}

/// Decodes an instruction word.
pub const fn decode(word: u16) -> Decoded {
    let opcode_bits = (word & OPCODE_MASK) >> OPCODE_SHIFT;
    Decoded {
        opcode_bits,
        opcode: Opcode::from_bits(opcode_bits),
        address: word & ADDRESS_MASK,
    }
}
