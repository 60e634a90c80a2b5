//! Runtime errors for the Intcode VM.
//!
//! Every engine error is fatal to the machine that raised it. Errors that
//! can be pinned to an instruction carry its address (`at`).

use intcode_common::Word;
use thiserror::Error;

/// Failures reported by I/O ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// No value is available to consume.
    #[error("no input available")]
    Exhausted,

    /// The source produced text that is not an integer.
    #[error("invalid input value '{0}'")]
    InvalidValue(String),

    /// The underlying reader or writer failed.
    #[error("i/o failure: {0}")]
    Io(String),
}

impl From<std::io::Error> for PortError {
    fn from(e: std::io::Error) -> Self {
        PortError::Io(e.to_string())
    }
}

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Memory access or jump target below address zero.
    #[error("negative address {address}")]
    NegativeAddress { address: Word },

    /// Memory access or jump target above the configured ceiling.
    #[error("address {address} exceeds limit {limit}")]
    AddressOverflow { address: Word, limit: usize },

    /// Mode digit outside {0, 1, 2}, or an immediate write target.
    #[error("invalid addressing mode {mode} for argument {arg} at instruction {at}")]
    InvalidAddressingMode { at: usize, arg: usize, mode: i64 },

    /// The instruction word names no known operation.
    #[error("invalid opcode {opcode} at instruction {at}")]
    InvalidOpcode { at: usize, opcode: Word },

    /// An input instruction ran with no value available.
    #[error("input exhausted at instruction {at}")]
    InputExhausted { at: usize },

    /// The input port failed for a reason other than exhaustion.
    #[error("input failed at instruction {at}: {source}")]
    Input { at: usize, source: PortError },

    /// The output port rejected a value.
    #[error("output failed at instruction {at}: {source}")]
    Output { at: usize, source: PortError },
}

/// Errors raised while driving a chain of machines.
///
/// These are caller-level expectations layered on top of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A pipeline needs at least one stage.
    #[error("pipeline has no stages")]
    Empty,

    /// A stage's machine failed.
    #[error("stage {stage}: {source}")]
    Runtime { stage: usize, source: RuntimeError },

    /// A stage did not produce exactly one value for the value it was fed.
    #[error("stage {stage} produced {produced} values (expected 1)")]
    OutputProtocol { stage: usize, produced: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::NegativeAddress {
                address: Word::from(-3)
            }
            .to_string(),
            "negative address -3"
        );
        assert_eq!(
            RuntimeError::InvalidOpcode {
                at: 4,
                opcode: Word::from(42)
            }
            .to_string(),
            "invalid opcode 42 at instruction 4"
        );
        assert_eq!(
            RuntimeError::InputExhausted { at: 0 }.to_string(),
            "input exhausted at instruction 0"
        );
        assert_eq!(
            RuntimeError::Input {
                at: 2,
                source: PortError::InvalidValue("abc".to_string())
            }
            .to_string(),
            "input failed at instruction 2: invalid input value 'abc'"
        );
    }

    #[test]
    fn pipeline_error_display_formats() {
        assert_eq!(
            PipelineError::OutputProtocol {
                stage: 2,
                produced: 0
            }
            .to_string(),
            "stage 2 produced 0 values (expected 1)"
        );
        assert_eq!(
            PipelineError::Runtime {
                stage: 1,
                source: RuntimeError::InputExhausted { at: 6 }
            }
            .to_string(),
            "stage 1: input exhausted at instruction 6"
        );
    }

    #[test]
    fn port_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(PortError::from(io), PortError::Io("pipe closed".to_string()));
    }
}
