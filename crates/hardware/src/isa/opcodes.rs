//! Accumulator machine opcodes.

use std::fmt;

use serde::Serialize;

/// Load: `AC <- memory[address]`.
pub const OP_LOAD: u16 = 0x1;
/// Store: `memory[address] <- AC`.
pub const OP_STORE: u16 = 0x2;
/// Add: `AC <- AC + memory[address]`.
pub const OP_ADD: u16 = 0x3;

/// A recognized operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    /// `LOAD`
    Load,
    /// `STORE`
    Store,
    /// `ADD`
    Add,
}

impl Opcode {
    /// Maps an opcode nibble to an operation; `None` for anything outside 1..=3.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            OP_LOAD => Some(Self::Load),
            OP_STORE => Some(Self::Store),
            OP_ADD => Some(Self::Add),
            _ => None,
        }
    }

    /// The opcode nibble.
    pub const fn bits(self) -> u16 {
        match self {
            Self::Load => OP_LOAD,
            Self::Store => OP_STORE,
            Self::Add => OP_ADD,
        }
    }

    /// Looks up a mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        [Self::Load, Self::Store, Self::Add]
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
        }
    }

    /// What the instruction does, in words.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Load => "load a memory word into AC",
            Self::Store => "store AC into memory",
            Self::Add => "add a memory word to AC",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
