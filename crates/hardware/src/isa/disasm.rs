//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction word back into assembly text for
//! explanations, memory dumps, and test diagnostics.
//!
//! ```
//! use archsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x100A), "LOAD 10");
//! assert_eq!(disassemble(0x0005), "DATA 0x0005");
//! ```

use crate::isa::decode::decode;

/// Renders an instruction word as `MNEMONIC address`, or as `DATA 0x....`
/// when the opcode nibble is not a recognized operation.
pub fn disassemble(word: u16) -> String {
    let d = decode(word);
    d.opcode.map_or_else(
        || format!("DATA {word:#06x}"),
        |op| format!("{} {}", op.mnemonic(), d.address),
    )
}
