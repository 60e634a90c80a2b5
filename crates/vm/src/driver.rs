//! Cooperative suspension at input instructions.
//!
//! A [`Driver`] steps its machine until it halts or is about to execute an
//! input instruction whose port has nothing ready. It then returns to the
//! caller without consuming anything, so several machines can be
//! interleaved on one thread by handing values between their ports.

use crate::error::RuntimeError;
use crate::machine::Machine;
use crate::port::{Captured, Input, Output, Queue};

/// A machine that can pause for input and be resumed later.
#[derive(Debug, Clone)]
pub struct Driver<I = Queue, O = Captured> {
    machine: Machine<I, O>,
}

impl<I: Input, O: Output> Driver<I, O> {
    /// Wrap a machine. Nothing runs until [`run_until_block`](Self::run_until_block).
    pub fn new(machine: Machine<I, O>) -> Self {
        Self { machine }
    }

    /// Step until the machine halts or would block on input.
    ///
    /// Returns the output port so the caller can inspect what accumulated.
    pub fn run_until_block(&mut self) -> Result<&O, RuntimeError> {
        let start = self.machine.steps();
        while !self.machine.is_halted() && !self.machine.would_block() {
            self.machine.step()?;
        }

        let ran = self.machine.steps() - start;
        if self.machine.is_halted() {
            log::debug!("halted at {} after {ran} steps", self.machine.pointer());
        } else {
            log::debug!(
                "suspended for input at {} after {ran} steps",
                self.machine.pointer()
            );
        }
        Ok(self.machine.output())
    }

    /// Swap in a new input port and continue.
    pub fn feed_input_and_resume(&mut self, input: I) -> Result<&O, RuntimeError> {
        log::debug!("resuming at {} with new input", self.machine.pointer());
        self.machine.replace_input(input);
        self.run_until_block()
    }

    /// Returns true once the machine has reached HALT.
    pub fn is_halted(&self) -> bool {
        self.machine.is_halted()
    }

    /// Returns true if the machine is parked on an input it cannot satisfy.
    pub fn is_blocked(&self) -> bool {
        !self.machine.is_halted() && self.machine.would_block()
    }

    /// The wrapped machine.
    pub fn machine(&self) -> &Machine<I, O> {
        &self.machine
    }

    /// Mutable access to the wrapped machine.
    pub fn machine_mut(&mut self) -> &mut Machine<I, O> {
        &mut self.machine
    }

    /// Unwrap the machine, e.g. to inspect its final memory.
    pub fn into_machine(self) -> Machine<I, O> {
        self.machine
    }

    /// The machine's input port, for handing in values between runs.
    pub fn input_mut(&mut self) -> &mut I {
        self.machine.input_mut()
    }

    /// The machine's output port, for draining values between runs.
    pub fn output_mut(&mut self) -> &mut O {
        self.machine.output_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Fixed;
    use intcode_common::{Program, Word};

    fn w(n: i64) -> Word {
        Word::from(n)
    }

    /// Reads two values and outputs their sum.
    fn adder() -> Program {
        Program::from_i64s(&[3, 11, 3, 12, 1, 11, 12, 13, 4, 13, 99, 0, 0, 0])
    }

    #[test]
    fn blocks_before_first_input() {
        let mut driver = Driver::new(Machine::new(&adder(), Queue::new(), Captured::new()));
        let out = driver.run_until_block().unwrap();
        assert!(out.is_empty());
        assert!(driver.is_blocked());
        assert!(!driver.is_halted());
        assert_eq!(driver.machine().pointer(), 0);
        assert_eq!(driver.machine().steps(), 0);
    }

    #[test]
    fn resumes_with_one_value_at_a_time() {
        let mut driver = Driver::new(Machine::new(&adder(), Fixed::default(), Captured::new()));
        driver.run_until_block().unwrap();

        driver.feed_input_and_resume(Fixed::new([5])).unwrap();
        assert!(driver.is_blocked());
        assert_eq!(driver.machine().pointer(), 2);

        let out = driver.feed_input_and_resume(Fixed::new([37])).unwrap();
        assert_eq!(out.values(), &[w(42)]);
        assert!(driver.is_halted());
        assert!(!driver.is_blocked());
    }

    #[test]
    fn queue_can_be_topped_up_in_place() {
        let mut driver = Driver::new(Machine::new(&adder(), Queue::new(), Captured::new()));
        driver.input_mut().extend([1, 2]);
        driver.run_until_block().unwrap();
        assert!(driver.is_halted());
        assert_eq!(driver.output_mut().drain(), vec![w(3)]);
    }

    #[test]
    fn halted_driver_stays_put() {
        let program = Program::from_i64s(&[99]);
        let mut driver = Driver::new(Machine::new(&program, Queue::new(), Captured::new()));
        driver.run_until_block().unwrap();
        driver.feed_input_and_resume(Queue::with_values([1])).unwrap();
        assert!(driver.is_halted());
        assert_eq!(driver.machine().steps(), 0);
    }

    #[test]
    fn errors_propagate() {
        let program = Program::from_i64s(&[42]);
        let mut driver = Driver::new(Machine::new(&program, Queue::new(), Captured::new()));
        assert!(matches!(
            driver.run_until_block(),
            Err(RuntimeError::InvalidOpcode { at: 0, .. })
        ));
    }
}
