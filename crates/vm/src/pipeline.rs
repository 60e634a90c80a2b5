//! A ring of machines that hand values to one another.
//!
//! Each stage runs the same program with its own seed inputs. A pass feeds
//! one value into stage 0, moves each stage's single output into the next
//! stage's queue, and yields the last stage's output. Values move only by
//! explicit copy between ports; no memory is shared.

use crate::driver::Driver;
use crate::error::PipelineError;
use crate::machine::Machine;
use crate::port::{Captured, Queue};
use intcode_common::{Program, Word};

/// A chain of suspendable machines driven in turn on one thread.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Driver<Queue, Captured>>,
}

impl Pipeline {
    /// Build one stage per seed list and run each until it first blocks.
    pub fn new<S, T>(
        program: &Program,
        seeds: impl IntoIterator<Item = S>,
    ) -> Result<Self, PipelineError>
    where
        S: IntoIterator<Item = T>,
        T: Into<Word>,
    {
        let mut stages = Vec::new();
        for (stage, seed) in seeds.into_iter().enumerate() {
            let machine = Machine::new(program, Queue::with_values(seed), Captured::new());
            let mut driver = Driver::new(machine);
            driver
                .run_until_block()
                .map_err(|source| PipelineError::Runtime { stage, source })?;
            stages.push(driver);
        }

        if stages.is_empty() {
            return Err(PipelineError::Empty);
        }
        log::debug!("pipeline ready with {} stages", stages.len());
        Ok(Self { stages })
    }

    /// Push `value` through every stage once and return the final output.
    pub fn pass(&mut self, value: impl Into<Word>) -> Result<Word, PipelineError> {
        let mut carry = value.into();

        for (stage, driver) in self.stages.iter_mut().enumerate() {
            driver.input_mut().push(carry);
            driver
                .run_until_block()
                .map_err(|source| PipelineError::Runtime { stage, source })?;

            carry = match <[Word; 1]>::try_from(driver.output_mut().drain()) {
                Ok([value]) => value,
                Err(values) => {
                    log::warn!("stage {stage} produced {} values", values.len());
                    return Err(PipelineError::OutputProtocol {
                        stage,
                        produced: values.len(),
                    });
                }
            };
        }

        log::debug!("pass produced {carry}");
        Ok(carry)
    }

    /// Feed each pass's result back into the head until any stage halts.
    ///
    /// Returns the last value the tail produced.
    pub fn run_feedback(&mut self, initial: impl Into<Word>) -> Result<Word, PipelineError> {
        let mut signal = initial.into();
        let mut passes = 0usize;
        while !self.any_halted() {
            signal = self.pass(signal)?;
            passes += 1;
        }
        log::debug!("feedback loop settled after {passes} passes");
        Ok(signal)
    }

    /// Returns true if any stage has reached HALT.
    pub fn any_halted(&self) -> bool {
        self.stages.iter().any(Driver::is_halted)
    }

    /// The stage drivers, head first.
    pub fn stages(&self) -> &[Driver<Queue, Captured>] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a constructed pipeline.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
