//! Micro-step explanations.
//!
//! Each `step()` reports what it did as structured data; the `Display`
//! implementations render the plain-text walkthrough shown to a student.

use std::fmt;

use serde::Serialize;

use crate::common::constants::PHASES_PER_INSTRUCTION;
use crate::isa::opcodes::Opcode;

/// The phase a micro-step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No program running (before loading, after reset, or once the program is exhausted).
    Stopped,
    /// Instruction fetch.
    Fetch,
    /// Instruction decode.
    Decode,
    /// Instruction execute.
    Execute,
}

impl Phase {
    /// Phase of the given micro-step counter while running.
    pub const fn of_step(step: usize) -> Self {
        match step % PHASES_PER_INSTRUCTION {
            0 => Self::Fetch,
            1 => Self::Decode,
            _ => Self::Execute,
        }
    }

    /// Upper-case phase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stopped => "STOPPED",
            Self::Fetch => "FETCH",
            Self::Decode => "DECODE",
            Self::Execute => "EXECUTE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single `step()` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum StepExplanation {
    /// `MAR <- PC; MBR <- memory[MAR]; IR <- MBR; PC <- PC + 1`.
    Fetch {
        /// Address fetched from (old PC).
        address: u16,
        /// Word read into MBR and IR.
        word: u16,
        /// PC after the increment.
        next_pc: u16,
    },
    /// `MAR <- IR[11:0]`.
    Decode {
        /// Raw opcode nibble.
        opcode_bits: u16,
        /// Recognized operation, if any.
        opcode: Option<Opcode>,
        /// Operand address moved into MAR.
        address: u16,
    },
    /// The operation itself.
    Execute(Execution),
    /// Nothing ran: the CPU is stopped or the program is exhausted.
    Halted,
}

/// Effect of an execute micro-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Execution {
    /// `MBR <- memory[MAR]; AC <- MBR`.
    Load {
        /// Source address.
        address: u16,
        /// Value loaded.
        value: u16,
    },
    /// `MBR <- AC; memory[MAR] <- MBR`.
    Store {
        /// Destination address.
        address: u16,
        /// Value stored.
        value: u16,
    },
    /// `MBR <- memory[MAR]; AC <- AC + MBR`.
    Add {
        /// Operand address.
        address: u16,
        /// Value read from memory.
        operand: u16,
        /// AC after the addition.
        result: u16,
    },
    /// Opcode nibble outside the instruction set; nothing changes.
    Unknown {
        /// Raw opcode nibble.
        opcode_bits: u16,
    },
}

impl StepExplanation {
    /// The phase this explanation belongs to.
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Fetch { .. } => Phase::Fetch,
            Self::Decode { .. } => Phase::Decode,
            Self::Execute(_) => Phase::Execute,
            Self::Halted => Phase::Stopped,
        }
    }
}

impl fmt::Display for StepExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch {
                address,
                word,
                next_pc,
            } => {
                writeln!(f, "Step 1: instruction fetch (FETCH)")?;
                writeln!(f, "MAR <- PC ({address})")?;
                writeln!(f, "MBR <- memory[MAR] ({word:#06x})")?;
                writeln!(f, "IR <- MBR")?;
                write!(f, "PC <- PC + 1 ({next_pc})")
            }
            Self::Decode {
                opcode_bits,
                opcode,
                address,
            } => {
                writeln!(f, "Step 2: instruction decode (DECODE)")?;
                writeln!(f, "Opcode: {opcode_bits}, address: {address}")?;
                match opcode {
                    Some(op) => write!(f, "Instruction: {op} ({})", op.description()),
                    None => write!(f, "Instruction: unknown opcode {opcode_bits}"),
                }
            }
            Self::Execute(exec) => {
                writeln!(f, "Step 3: instruction execute (EXECUTE)")?;
                write!(f, "{exec}")
            }
            Self::Halted => f.write_str("Execution complete"),
        }
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { address, value } => {
                write!(f, "LOAD: loading value {value} from memory[{address}] into AC")
            }
            Self::Store { address, value } => {
                write!(f, "STORE: storing value {value} from AC into memory[{address}]")
            }
            Self::Add {
                address,
                operand,
                result,
            } => write!(
                f,
                "ADD: adding value {operand} from memory[{address}] to AC (result: {result})"
            ),
            Self::Unknown { opcode_bits } => {
                write!(f, "Unknown opcode {opcode_bits}: no operation performed")
            }
        }
    }
}
