//! Fetch/decode/execute loop and opcode dispatch.

use crate::error::{PortError, RuntimeError};
use crate::machine::{Machine, Status};
use crate::port::{Input, Output};
use intcode_common::{Instruction, Opcode, Word};
use num_traits::Zero;

fn flag(condition: bool) -> Word {
    if condition {
        Word::from(1)
    } else {
        Word::zero()
    }
}

impl<I: Input, O: Output> Machine<I, O> {
    /// Execute exactly one instruction and return the resulting status.
    ///
    /// Stepping a halted machine changes nothing. Any error leaves the
    /// machine at the failing instruction; it must not be stepped again.
    pub fn step(&mut self) -> Result<Status, RuntimeError> {
        let instr = self.current()?;

        if log::log_enabled!(log::Level::Trace) {
            match self.describe() {
                Ok(line) => log::trace!("{line}"),
                Err(e) => log::trace!("[{}] undescribable: {e}", self.pointer),
            }
        }

        match instr.opcode {
            Opcode::Halt => return Ok(Status::Halted),

            Opcode::Add => self.exec_binary(&instr, |a, b| a + b)?,
            Opcode::Multiply => self.exec_binary(&instr, |a, b| a * b)?,
            Opcode::LessThan => self.exec_binary(&instr, |a, b| flag(a < b))?,
            Opcode::Equals => self.exec_binary(&instr, |a, b| flag(a == b))?,

            Opcode::Input => self.exec_input(&instr)?,
            Opcode::Output => self.exec_output(&instr)?,

            Opcode::JumpIfTrue => self.exec_jump(&instr, |v| !v.is_zero())?,
            Opcode::JumpIfFalse => self.exec_jump(&instr, |v| v.is_zero())?,

            Opcode::AdjustRelativeBase => self.exec_adjust_base(&instr)?,
        }

        self.steps += 1;
        Ok(self.status())
    }

    /// Step until HALT. Any error aborts the run.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.status() == Status::Running {
            self.step()?;
        }
        log::debug!("halted at {} after {} steps", self.pointer, self.steps);
        Ok(())
    }

    // ---- Arithmetic & comparison ----

    /// `target(2) := op(value(0), value(1))`
    fn exec_binary(
        &mut self,
        instr: &Instruction,
        op: fn(Word, Word) -> Word,
    ) -> Result<(), RuntimeError> {
        let a = self.value(instr, 0)?;
        let b = self.value(instr, 1)?;
        let target = self.target(instr, 2)?;
        self.memory.write(&target, op(a, b))?;
        self.pointer += instr.opcode.width();
        Ok(())
    }

    // ---- I/O ----

    fn exec_input(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let at = self.pointer;
        let target = self.target(instr, 0)?;
        self.memory.address(&target)?;
        let value = self.input.consume().map_err(|source| match source {
            PortError::Exhausted => RuntimeError::InputExhausted { at },
            source => RuntimeError::Input { at, source },
        })?;
        self.memory.write(&target, value)?;
        self.pointer += instr.opcode.width();
        Ok(())
    }

    fn exec_output(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let at = self.pointer;
        let value = self.value(instr, 0)?;
        self.output
            .emit(value)
            .map_err(|source| RuntimeError::Output { at, source })?;
        self.pointer += instr.opcode.width();
        Ok(())
    }

    // ---- Control flow ----

    fn exec_jump(
        &mut self,
        instr: &Instruction,
        taken: fn(&Word) -> bool,
    ) -> Result<(), RuntimeError> {
        let condition = self.value(instr, 0)?;
        if taken(&condition) {
            let destination = self.value(instr, 1)?;
            self.pointer = self.memory.address(&destination)?;
        } else {
            self.pointer += instr.opcode.width();
        }
        Ok(())
    }

    fn exec_adjust_base(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let delta = self.value(instr, 0)?;
        self.relative_base += delta;
        self.pointer += instr.opcode.width();
        Ok(())
    }
}
