//! CPU Engine Definition and Initialization.
//!
//! This module defines `CpuEngine`, the accumulator machine driven one
//! micro-step at a time. It coordinates the following:
//! 1. **State Management:** Registers, memory, the loaded program, and the running flag.
//! 2. **Program Loading:** Parsing, encoding into memory, and seeding demonstration data.
//! 3. **Instruction Cycle:** FETCH -> DECODE -> EXECUTE, selected by the step counter.
//! 4. **Observability:** Structured explanations, touched sets, event log, and counters.

/// Micro-step explanations and the phase enum.
pub mod explain;

/// Fetch, decode, and execute micro-steps.
pub mod execution;

/// Word-addressed main memory.
pub mod memory;

use std::collections::BTreeSet;

use serde::Serialize;

use self::explain::{Phase, StepExplanation};
use self::memory::Memory;
use crate::common::constants::MAX_PROGRAM_LEN;
use crate::common::{EventLog, Register, RegisterFile};
use crate::config::{CpuConfig, SeedCell};
use crate::isa::asm::parse_program;
use crate::isa::instruction::Instruction;
use crate::stats::CpuStats;

/// Snapshot of the engine state handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuState {
    /// Register values.
    pub registers: RegisterFile,
    /// Memory contents.
    pub memory: Memory,
    /// Loaded program.
    pub program: Vec<Instruction>,
    /// Whether a program is loaded and not yet exhausted.
    pub running: bool,
    /// Micro-steps performed since the program was loaded.
    pub current_step: usize,
}

/// Everything one call to [`CpuEngine::step`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// State after the step.
    pub state: CpuState,
    /// What the step did.
    pub explanation: StepExplanation,
    /// Registers read or written by the step.
    pub touched_registers: BTreeSet<Register>,
    /// Memory cells read or written by the step.
    pub touched_memory: BTreeSet<usize>,
}

impl StepOutcome {
    /// Whether this step performed no work because the CPU is stopped.
    pub const fn is_halted(&self) -> bool {
        matches!(self.explanation, StepExplanation::Halted)
    }
}

/// The accumulator CPU.
///
/// The engine starts stopped with zeroed registers and memory. `load_program`
/// starts it; each `step` then performs one micro-step until the program
/// counter runs past the last instruction. The check runs on every step, so
/// the final instruction is fetched but never decoded or executed.
#[derive(Debug, Clone)]
pub struct CpuEngine {
    regs: RegisterFile,
    memory: Memory,
    program: Vec<Instruction>,
    running: bool,
    current_step: usize,
    seed_data: Vec<SeedCell>,
    log: EventLog,
    stats: CpuStats,
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new(&CpuConfig::default())
    }
}

impl CpuEngine {
    /// Creates a stopped engine that seeds `config.seed_data` after each load.
    pub fn new(config: &CpuConfig) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: Memory::new(),
            program: Vec::new(),
            running: false,
            current_step: 0,
            seed_data: config.seed_data.clone(),
            log: EventLog::with_marker("System initialized"),
            stats: CpuStats::default(),
        }
    }

    /// Parses `source`, loads it into memory, and starts the engine.
    ///
    /// Each instruction word goes into the cell matching its source line;
    /// lines beyond the end of memory stay in the program but have no cell.
    /// Instructions past [`MAX_PROGRAM_LEN`] are dropped with a warning.
    /// The seed data is written afterwards and overwrites any instruction at
    /// the same address. Registers and counters are cleared.
    pub fn load_program(&mut self, source: &str) -> CpuState {
        let mut program = parse_program(source);

        self.regs.reset();
        self.memory.clear();
        self.stats = CpuStats::default();
        self.log.restart("Program loaded successfully");

        if program.len() > MAX_PROGRAM_LEN {
            self.log.warn(format!(
                "program has {} instructions, only the first {MAX_PROGRAM_LEN} are kept",
                program.len()
            ));
            program.truncate(MAX_PROGRAM_LEN);
        }

        for instr in &program {
            if instr.opcode().is_none() {
                self.log.warn(format!(
                    "line {}: unknown instruction '{}' encoded as 0",
                    instr.source_line + 1,
                    instr.mnemonic
                ));
            }
            if !self.memory.write(instr.source_line, instr.encode()) {
                self.log.warn(format!(
                    "line {}: no memory cell for '{} {}'",
                    instr.source_line + 1,
                    instr.mnemonic,
                    instr.operand_address
                ));
            }
        }

        for seed in &self.seed_data {
            if !self.memory.write(seed.address, seed.value) {
                self.log.warn(format!(
                    "seed cell {} is outside memory, ignored",
                    seed.address
                ));
            }
        }
        self.log.info("Memory initialized with test data");

        tracing::debug!(instructions = program.len(), "program loaded");
        self.program = program;
        self.running = true;
        self.current_step = 0;
        self.state()
    }

    /// Performs the next micro-step.
    ///
    /// When the engine is stopped, or the program counter has reached the
    /// program length, the engine stops (if it was not already), logs a
    /// notice, and returns a [`StepExplanation::Halted`] outcome without
    /// touching anything else.
    pub fn step(&mut self) -> StepOutcome {
        if !self.running || self.pc_exhausted() {
            self.running = false;
            self.log.info("Execution complete");
            return StepOutcome {
                state: self.state(),
                explanation: StepExplanation::Halted,
                touched_registers: BTreeSet::new(),
                touched_memory: BTreeSet::new(),
            };
        }

        let phase = Phase::of_step(self.current_step);
        let micro = match phase {
            Phase::Fetch => self.fetch(),
            Phase::Decode => self.decode(),
            Phase::Execute | Phase::Stopped => self.execute(),
        };
        self.current_step += 1;
        self.stats.steps += 1;

        tracing::debug!(
            step = self.current_step,
            phase = %phase,
            regs = %self.regs.dump(),
            "micro-step"
        );

        StepOutcome {
            state: self.state(),
            explanation: micro.explanation,
            touched_registers: micro.registers,
            touched_memory: micro.memory,
        }
    }

    /// Steps until the engine halts or `max_steps` micro-steps have run.
    ///
    /// Returns the outcomes of the micro-steps that did work; the final
    /// halting step is not included.
    pub fn run_to_completion(&mut self, max_steps: usize) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..max_steps {
            let outcome = self.step();
            if outcome.is_halted() {
                return outcomes;
            }
            outcomes.push(outcome);
        }
        if self.running {
            tracing::warn!(max_steps, "step budget exhausted before the program finished");
        }
        outcomes
    }

    /// Stops the engine and clears registers, memory, program, and counters.
    pub fn reset(&mut self) -> CpuState {
        self.regs.reset();
        self.memory.clear();
        self.program.clear();
        self.running = false;
        self.current_step = 0;
        self.stats = CpuStats::default();
        self.log.restart("Machine reset");
        self.state()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CpuState {
        CpuState {
            registers: self.regs,
            memory: self.memory.clone(),
            program: self.program.clone(),
            running: self.running,
            current_step: self.current_step,
        }
    }

    /// The phase the next `step` will perform, or `Stopped` if it will halt.
    pub fn phase(&self) -> Phase {
        if self.running && !self.pc_exhausted() {
            Phase::of_step(self.current_step)
        } else {
            Phase::Stopped
        }
    }

    fn pc_exhausted(&self) -> bool {
        usize::from(self.regs.pc) >= self.program.len()
    }

    /// Register values.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Memory contents.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Loaded program.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Whether a program is loaded and not yet exhausted.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Micro-steps performed since the program was loaded.
    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    /// Event history.
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Counters.
    pub const fn stats(&self) -> &CpuStats {
        &self.stats
    }
}
