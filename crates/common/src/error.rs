//! Decode and parse errors for Intcode memory images.

use crate::Word;
use thiserror::Error;

/// Errors that occur while decoding an instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low two digits of the instruction word name no known operation.
    #[error("invalid opcode: {0}")]
    InvalidOpcode(Word),

    /// A mode digit outside {0, 1, 2}.
    #[error("invalid addressing mode: {0}")]
    InvalidMode(i64),
}

/// Errors that occur while parsing the comma-separated program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text contained no integers at all.
    #[error("empty program text")]
    Empty,

    /// A token could not be parsed as a decimal integer.
    #[error("invalid integer '{token}' at position {index}")]
    InvalidInteger { index: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_opcode() {
        assert_eq!(
            DecodeError::InvalidOpcode(Word::from(42)).to_string(),
            "invalid opcode: 42"
        );
    }

    #[test]
    fn display_invalid_mode() {
        assert_eq!(
            DecodeError::InvalidMode(7).to_string(),
            "invalid addressing mode: 7"
        );
    }

    #[test]
    fn display_empty() {
        assert_eq!(ParseError::Empty.to_string(), "empty program text");
    }

    #[test]
    fn display_invalid_integer() {
        let e = ParseError::InvalidInteger {
            index: 3,
            token: "x1".to_string(),
        };
        assert_eq!(e.to_string(), "invalid integer 'x1' at position 3");
    }
}
