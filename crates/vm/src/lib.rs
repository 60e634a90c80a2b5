//! Intcode virtual machine.
//!
//! The machine interprets a flat image of unbounded integers:
//! - Instructions encode an opcode and per-operand addressing modes
//! - Memory grows on demand; unwritten cells read as zero
//! - A relative base offsets relative-mode operands
//! - Input instructions are the only suspension points
//!
//! # Usage
//!
//! ```
//! use intcode_vm::{load, run_to_completion, Captured, Fixed, Word};
//!
//! let program = load("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
//! let machine = run_to_completion(&program, Fixed::new([8]), Captured::new()).unwrap();
//! assert_eq!(machine.output().values(), &[Word::from(1)]);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod pipeline;
pub mod port;
pub mod resolve;
pub mod trace;

pub use config::{Limits, DEFAULT_MAX_ADDRESS};
pub use driver::Driver;
pub use error::{PipelineError, PortError, RuntimeError};
pub use machine::{Machine, Status};
pub use memory::Memory;
pub use pipeline::Pipeline;
pub use port::{Captured, Fixed, Input, Interactive, Output, Printer, Queue};

pub use intcode_common::{ParseError, Program, Word};

/// Parse the comma-separated text form into a program image.
pub fn load(text: &str) -> Result<Program, ParseError> {
    Program::parse(text)
}

/// Run `program` from a fresh state until HALT.
///
/// Returns the final machine so callers can inspect memory and drain
/// captured output.
///
/// # Errors
///
/// Returns [`RuntimeError`] for bad addresses, modes or opcodes, and for
/// input instructions that find the port empty.
pub fn run_to_completion<I: Input, O: Output>(
    program: &Program,
    input: I,
    output: O,
) -> Result<Machine<I, O>, RuntimeError> {
    let mut machine = Machine::new(program, input, output);
    machine.run()?;
    Ok(machine)
}

/// Wrap a fresh machine in a [`Driver`] that pauses instead of failing when
/// input runs dry.
pub fn make_suspendable<I: Input, O: Output>(
    program: &Program,
    input: I,
    output: O,
) -> Driver<I, O> {
    Driver::new(Machine::new(program, input, output))
}

/// Run `program` on pre-supplied inputs and return everything it output.
pub fn run<T: Into<Word>>(
    program: &Program,
    inputs: impl IntoIterator<Item = T>,
) -> Result<Vec<Word>, RuntimeError> {
    let machine = run_to_completion(program, Fixed::new(inputs), Captured::new())?;
    let (_, _, output) = machine.into_parts();
    Ok(output.into_values())
}
