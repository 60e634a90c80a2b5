//! Opcode definitions for the Intcode instruction set.

use crate::error::DecodeError;
use crate::Word;
use num_traits::ToPrimitive;

/// Identifies the operation to perform.
///
/// The discriminant is the two-digit code stored in the low digits of an
/// instruction word.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `target := a + b`
    Add = 1,
    /// `target := a * b`
    Multiply = 2,
    /// `target := input`. The only instruction that can suspend.
    Input = 3,
    /// Emit `a` to the output port.
    Output = 4,
    /// Jump to `b` when `a != 0`.
    JumpIfTrue = 5,
    /// Jump to `b` when `a == 0`.
    JumpIfFalse = 6,
    /// `target := (a < b) as 1/0`
    LessThan = 7,
    /// `target := (a == b) as 1/0`
    Equals = 8,
    /// `relative_base += a`
    AdjustRelativeBase = 9,
    /// Stop execution.
    Halt = 99,
}

/// All valid opcodes, in numeric order.
pub const ALL_OPCODES: [Opcode; 10] = [
    Opcode::Add,
    Opcode::Multiply,
    Opcode::Input,
    Opcode::Output,
    Opcode::JumpIfTrue,
    Opcode::JumpIfFalse,
    Opcode::LessThan,
    Opcode::Equals,
    Opcode::AdjustRelativeBase,
    Opcode::Halt,
];

impl TryFrom<&Word> for Opcode {
    type Error = DecodeError;

    fn try_from(value: &Word) -> Result<Self, Self::Error> {
        match value.to_i64() {
            Some(1) => Ok(Opcode::Add),
            Some(2) => Ok(Opcode::Multiply),
            Some(3) => Ok(Opcode::Input),
            Some(4) => Ok(Opcode::Output),
            Some(5) => Ok(Opcode::JumpIfTrue),
            Some(6) => Ok(Opcode::JumpIfFalse),
            Some(7) => Ok(Opcode::LessThan),
            Some(8) => Ok(Opcode::Equals),
            Some(9) => Ok(Opcode::AdjustRelativeBase),
            Some(99) => Ok(Opcode::Halt),
            _ => Err(DecodeError::InvalidOpcode(value.clone())),
        }
    }
}

impl Opcode {
    /// Returns the short mnemonic used in traces.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Multiply => "MUL",
            Opcode::Input => "IN",
            Opcode::Output => "OUT",
            Opcode::JumpIfTrue => "JNZ",
            Opcode::JumpIfFalse => "JZ",
            Opcode::LessThan => "LT",
            Opcode::Equals => "EQ",
            Opcode::AdjustRelativeBase => "ARB",
            Opcode::Halt => "HALT",
        }
    }

    /// Number of operands following the instruction word.
    pub fn arg_count(&self) -> usize {
        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    /// Number of memory cells the instruction occupies, including the
    /// instruction word itself. Jumps that are taken do not advance by this.
    pub fn width(&self) -> usize {
        self.arg_count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_valid_opcodes() {
        for &opcode in &ALL_OPCODES {
            let word = Word::from(opcode as u8);
            assert_eq!(Opcode::try_from(&word), Ok(opcode));
        }
    }

    #[test]
    fn widths_match_instruction_table() {
        let widths: Vec<usize> = ALL_OPCODES.iter().map(Opcode::width).collect();
        assert_eq!(widths, vec![4, 4, 2, 2, 3, 3, 4, 4, 2, 1]);
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in [0, 10, 42, 98, -1] {
            let word = Word::from(code);
            assert_eq!(
                Opcode::try_from(&word),
                Err(DecodeError::InvalidOpcode(word.clone()))
            );
        }
    }

    #[test]
    fn rejects_huge_values() {
        let word: Word = "123456789012345678901234567890".parse().unwrap();
        assert!(Opcode::try_from(&word).is_err());
    }

    #[test]
    fn mnemonics_are_unique() {
        let mut names: Vec<&str> = ALL_OPCODES.iter().map(Opcode::mnemonic).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_OPCODES.len());
    }
}
