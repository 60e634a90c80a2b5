//! Intcode common types and instruction decoding.
//!
//! This crate provides the foundational data structures for the Intcode
//! machine:
//!
//! - [`Word`]: the arbitrary-precision integer stored in every cell
//! - [`Opcode`]: the ten supported operations
//! - [`Mode`]: position, immediate and relative addressing
//! - [`Instruction`], [`decode`], [`mode_for`]: instruction word decoding
//! - [`Program`]: a memory image and its comma-separated text form
//! - [`DecodeError`], [`ParseError`]: decode and parse failures

pub mod error;
pub mod instruction;
pub mod mode;
pub mod opcode;
pub mod program;

/// A memory cell, operand, or I/O value.
///
/// Programs multiply operands past 64 bits, so words are unbounded.
pub type Word = num_bigint::BigInt;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, ParseError};
pub use instruction::{decode, mode_for, Instruction};
pub use mode::Mode;
pub use opcode::Opcode;
pub use program::Program;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding the same word twice gives the same pair.
        #[test]
        fn decode_is_deterministic(raw in any::<i64>()) {
            let word = Word::from(raw);
            prop_assert_eq!(decode(&word), decode(&word));
        }

        /// The opcode and mode digits reassemble into the original word.
        #[test]
        fn decode_reassembles(raw in any::<i64>()) {
            let word = Word::from(raw);
            let (opcode, modes) = decode(&word);
            prop_assert_eq!(modes * Word::from(100) + opcode, word);
        }

        /// `mode_for` is total and always yields a single decimal digit.
        #[test]
        fn mode_for_is_total(digits in any::<i64>(), arg in 0usize..64) {
            let digit = mode_for(&Word::from(digits), arg);
            prop_assert!((-9..=9).contains(&digit));
        }

        /// Mode digits match the decimal text of a non-negative word.
        #[test]
        fn mode_for_matches_decimal_text(digits in 0u64..u64::MAX, arg in 0usize..25) {
            let text = digits.to_string();
            let expected = text
                .chars()
                .rev()
                .nth(arg)
                .map(|c| i64::from(c as u8 - b'0'))
                .unwrap_or(0);
            prop_assert_eq!(mode_for(&Word::from(digits), arg), expected);
        }

        /// The text form of a program parses back to the same program.
        #[test]
        fn program_text_roundtrip(cells in prop::collection::vec(any::<i64>(), 1..50)) {
            let program = Program::from_i64s(&cells);
            let parsed = Program::parse(&program.to_string()).unwrap();
            prop_assert_eq!(program, parsed);
        }
    }
}
