//! Instruction Cycle.
//!
//! This module implements the three micro-steps of the CPU engine. Each one:
//! 1. **Mutates** the register set and memory exactly as the cycle prescribes.
//! 2. **Reports** the registers and memory cells it touched, for highlighting.
//! 3. **Explains** itself with a structured `StepExplanation`.
//!
//! Memory accesses through `MAR` may point past the 16-word array: reads then
//! yield 0 and writes are dropped, with a warning in the event log.

use std::collections::BTreeSet;

use super::CpuEngine;
use super::explain::{Execution, StepExplanation};
use crate::common::Register;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::opcodes::Opcode;

/// Result of one micro-step, before the engine snapshots its state.
#[derive(Debug)]
pub(super) struct MicroStep {
    pub(super) explanation: StepExplanation,
    pub(super) registers: BTreeSet<Register>,
    pub(super) memory: BTreeSet<usize>,
}

impl MicroStep {
    fn new(
        explanation: StepExplanation,
        registers: impl IntoIterator<Item = Register>,
        memory: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            explanation,
            registers: registers.into_iter().collect(),
            memory: memory.into_iter().collect(),
        }
    }
}

impl CpuEngine {
    /// `MAR <- PC; MBR <- memory[MAR]; IR <- MBR; PC <- PC + 1`.
    pub(super) fn fetch(&mut self) -> MicroStep {
        let address = self.regs.pc;
        self.regs.mar = address;
        self.regs.mbr = self.read_memory(address);
        self.regs.ir = self.regs.mbr;
        self.regs.pc = address.saturating_add(1);
        self.stats.fetches += 1;

        self.log.info(format!(
            "FETCH: PC={address}, IR={:X} ({})",
            self.regs.ir,
            disassemble(self.regs.ir)
        ));

        MicroStep::new(
            StepExplanation::Fetch {
                address,
                word: self.regs.ir,
                next_pc: self.regs.pc,
            },
            [Register::Mar, Register::Mbr, Register::Ir, Register::Pc],
            [usize::from(address)],
        )
    }

    /// `MAR <- IR[11:0]`.
    pub(super) fn decode(&mut self) -> MicroStep {
        let d = decode(self.regs.ir);
        self.regs.mar = d.address;

        match d.opcode {
            Some(op) => self.log.info(format!(
                "DECODE: {op} decoded, address={}",
                d.address
            )),
            None => self.log.warn(format!(
                "DECODE: unknown opcode {} in IR={:#06x}, address={}",
                d.opcode_bits, self.regs.ir, d.address
            )),
        }

        MicroStep::new(
            StepExplanation::Decode {
                opcode_bits: d.opcode_bits,
                opcode: d.opcode,
                address: d.address,
            },
            [Register::Ir, Register::Mar],
            [],
        )
    }

    /// Performs the operation held in IR against the address in MAR.
    pub(super) fn execute(&mut self) -> MicroStep {
        let d = decode(self.regs.ir);
        let address = self.regs.mar;
        let cell = usize::from(address);
        self.stats.instructions_completed += 1;

        let Some(op) = d.opcode else {
            self.stats.unknown_opcodes += 1;
            self.log.warn(format!(
                "EXECUTE: unknown opcode {}, no operation",
                d.opcode_bits
            ));
            return MicroStep::new(
                StepExplanation::Execute(Execution::Unknown {
                    opcode_bits: d.opcode_bits,
                }),
                [],
                [],
            );
        };

        let execution = match op {
            Opcode::Load => {
                self.regs.mbr = self.read_memory(address);
                self.regs.ac = self.regs.mbr;
                self.log
                    .info(format!("EXECUTE: LOAD {address} -> AC={}", self.regs.ac));
                Execution::Load {
                    address,
                    value: self.regs.ac,
                }
            }
            Opcode::Store => {
                self.regs.mbr = self.regs.ac;
                self.write_memory(address, self.regs.mbr);
                self.log.info(format!(
                    "EXECUTE: STORE AC={} -> memory[{address}]",
                    self.regs.ac
                ));
                Execution::Store {
                    address,
                    value: self.regs.mbr,
                }
            }
            Opcode::Add => {
                self.regs.mbr = self.read_memory(address);
                self.regs.ac = self.regs.ac.wrapping_add(self.regs.mbr);
                self.log.info(format!(
                    "EXECUTE: ADD {address} (value={}) -> AC={}",
                    self.regs.mbr, self.regs.ac
                ));
                Execution::Add {
                    address,
                    operand: self.regs.mbr,
                    result: self.regs.ac,
                }
            }
        };

        MicroStep::new(
            StepExplanation::Execute(execution),
            [Register::Mbr, Register::Ac],
            [cell],
        )
    }

    /// Reads a memory word, yielding 0 for addresses past the end.
    fn read_memory(&mut self, address: u16) -> u16 {
        self.memory.read(usize::from(address)).unwrap_or_else(|| {
            self.log.warn(format!(
                "memory[{address}] is outside the {}-word memory, read as 0",
                self.memory.len()
            ));
            0
        })
    }

    /// Writes a memory word, dropping writes past the end.
    fn write_memory(&mut self, address: u16, val: u16) {
        if !self.memory.write(usize::from(address), val) {
            self.log.warn(format!(
                "memory[{address}] is outside the {}-word memory, store dropped",
                self.memory.len()
            ));
        }
    }
}
