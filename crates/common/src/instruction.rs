//! Instruction word decoding.
//!
//! An instruction word is a decimal number read from the right:
//! ```text
//! ...  C  B  A  D  E
//!      |  |  |  \__/
//!      |  |  |   opcode (two digits)
//!      |  |  mode of operand 0
//!      |  mode of operand 1
//!      mode of operand 2
//! ```
//! Missing mode digits are zero (position mode).

use crate::error::DecodeError;
use crate::mode::Mode;
use crate::opcode::Opcode;
use crate::Word;
use num_traits::{ToPrimitive, Zero};

/// Split a raw instruction word into `(opcode, mode_digits)`.
///
/// `opcode = raw mod 100` and `mode_digits = (raw - opcode) / 100`, both
/// truncating toward zero.
pub fn decode(raw: &Word) -> (Word, Word) {
    let hundred = Word::from(100);
    let opcode = raw % &hundred;
    let mode_digits = (raw - &opcode) / &hundred;
    (opcode, mode_digits)
}

/// Extract the mode digit for operand `arg_index` (0 = least significant).
///
/// Digits beyond the most significant one are zero. The result is the raw
/// digit; it is only validated when converted to a [`Mode`].
pub fn mode_for(mode_digits: &Word, arg_index: usize) -> i64 {
    let ten = Word::from(10);
    let mut rest = mode_digits.clone();
    for _ in 0..arg_index {
        if rest.is_zero() {
            return 0;
        }
        rest /= &ten;
    }
    // A single remainder by ten always fits.
    (rest % ten).to_i64().unwrap_or(0)
}

/// A decoded instruction: the operation plus the undecoded mode digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Remaining leading digits of the instruction word.
    pub mode_digits: Word,
}

impl Instruction {
    /// Decode a raw instruction word.
    pub fn decode(raw: &Word) -> Result<Self, DecodeError> {
        let (code, mode_digits) = decode(raw);
        let opcode = Opcode::try_from(&code)?;
        Ok(Self {
            opcode,
            mode_digits,
        })
    }

    /// The raw mode digit for operand `arg`.
    pub fn mode_digit(&self, arg: usize) -> i64 {
        mode_for(&self.mode_digits, arg)
    }

    /// The validated addressing mode for operand `arg`.
    pub fn mode(&self, arg: usize) -> Result<Mode, DecodeError> {
        Mode::try_from(self.mode_digit(arg))
    }
}
