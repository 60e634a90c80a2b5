//! Machine state: memory, instruction pointer, relative base, and ports.

use crate::config::Limits;
use crate::error::RuntimeError;
use crate::memory::Memory;
use crate::port::{Captured, Input, Queue};
use crate::resolve::{resolve_target, resolve_value, Site};
use intcode_common::{decode, DecodeError, Instruction, Program, Word};

/// Whether a machine can make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The instruction under the pointer is not HALT.
    Running,
    /// The instruction under the pointer is HALT. Terminal.
    Halted,
}

/// The complete state needed to resume execution.
///
/// Cloning a machine (when its ports are `Clone`) forks an independent
/// copy; nothing is shared between the two.
#[derive(Debug, Clone)]
pub struct Machine<I = Queue, O = Captured> {
    pub(crate) memory: Memory,
    pub(crate) pointer: usize,
    pub(crate) relative_base: Word,
    pub(crate) input: I,
    pub(crate) output: O,
    pub(crate) steps: u64,
}

impl<I, O> Machine<I, O> {
    /// Load `program` with pointer 0 and relative base 0.
    pub fn new(program: &Program, input: I, output: O) -> Self {
        Self::with_limits(program, input, output, Limits::default())
    }

    /// Load `program` under custom limits.
    pub fn with_limits(program: &Program, input: I, output: O, limits: Limits) -> Self {
        Self {
            memory: Memory::with_limits(program.cells().to_vec(), limits),
            pointer: 0,
            relative_base: Word::default(),
            input,
            output,
            steps: 0,
        }
    }

    /// Peek at the instruction under the pointer.
    pub fn status(&self) -> Status {
        let (opcode, _) = decode(&self.memory.get(self.pointer));
        if opcode == Word::from(99) {
            Status::Halted
        } else {
            Status::Running
        }
    }

    /// Returns true once the pointer rests on HALT.
    pub fn is_halted(&self) -> bool {
        self.status() == Status::Halted
    }

    /// The current memory image.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Address of the next instruction to execute.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Offset applied to relative-mode operands.
    pub fn relative_base(&self) -> &Word {
        &self.relative_base
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The input port.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input port, e.g. to queue more values.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The output port.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the output port, e.g. to drain captured values.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Swap in a new input port, returning the old one.
    pub fn replace_input(&mut self, input: I) -> I {
        std::mem::replace(&mut self.input, input)
    }

    /// Tear the machine down into its memory and ports.
    pub fn into_parts(self) -> (Memory, I, O) {
        (self.memory, self.input, self.output)
    }

    /// Decode the instruction under the pointer.
    pub(crate) fn current(&self) -> Result<Instruction, RuntimeError> {
        let at = self.pointer;
        Instruction::decode(&self.memory.get(at)).map_err(|e| match e {
            DecodeError::InvalidOpcode(opcode) => RuntimeError::InvalidOpcode { at, opcode },
            DecodeError::InvalidMode(mode) => {
                RuntimeError::InvalidAddressingMode { at, arg: 0, mode }
            }
        })
    }

    /// The undecoded word of operand `arg`.
    pub(crate) fn raw_arg(&self, arg: usize) -> Word {
        self.memory.get(self.pointer.saturating_add(arg + 1))
    }

    fn site(&self, arg: usize) -> Site {
        Site {
            at: self.pointer,
            arg,
        }
    }

    /// The value operand `arg` denotes under its mode.
    pub(crate) fn value(&self, instr: &Instruction, arg: usize) -> Result<Word, RuntimeError> {
        resolve_value(
            self.site(arg),
            instr.mode_digit(arg),
            &self.raw_arg(arg),
            &self.memory,
            &self.relative_base,
        )
    }

    /// The address write-target operand `arg` denotes under its mode.
    pub(crate) fn target(&self, instr: &Instruction, arg: usize) -> Result<Word, RuntimeError> {
        resolve_target(
            self.site(arg),
            instr.mode_digit(arg),
            &self.raw_arg(arg),
            &self.relative_base,
        )
    }
}

impl<I: Input, O> Machine<I, O> {
    /// Returns true if the next instruction is an input and the port has
    /// nothing ready.
    pub fn would_block(&self) -> bool {
        let (opcode, _) = decode(&self.memory.get(self.pointer));
        opcode == Word::from(3) && !self.input.is_ready()
    }
}
