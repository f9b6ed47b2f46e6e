//! Instruction Set Architecture (ISA) Definitions.
//!
//! The accumulator machine understands three instructions, each a 16-bit word
//! with the opcode in the high nibble and an operand address in the low 12 bits:
//!
//! | mnemonic | opcode | effect                  |
//! |----------|--------|-------------------------|
//! | `LOAD a` | `0x1`  | `AC <- memory[a]`       |
//! | `STORE a`| `0x2`  | `memory[a] <- AC`       |
//! | `ADD a`  | `0x3`  | `AC <- AC + memory[a]`  |

/// Program source parsing (text to `Instruction` records).
pub mod asm;

/// Instruction word decoding.
pub mod decode;

/// Instruction disassembler for explanations and diagnostics.
pub mod disasm;

/// Parsed instruction records and word encoding.
pub mod instruction;

/// Opcode definitions.
pub mod opcodes;

pub use asm::parse_program;
pub use decode::{Decoded, decode};
pub use instruction::{Instruction, encode};
pub use opcodes::Opcode;
