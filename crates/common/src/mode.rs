//! Addressing modes for instruction operands.

use crate::error::DecodeError;

/// How an operand's raw value is interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The operand is an address; the value lives in memory.
    Position = 0,
    /// The operand is the value itself. Never valid for a write target.
    Immediate = 1,
    /// The operand is an offset from the relative base.
    Relative = 2,
}

/// All valid modes, in digit order.
pub const ALL_MODES: [Mode; 3] = [Mode::Position, Mode::Immediate, Mode::Relative];

impl TryFrom<i64> for Mode {
    type Error = DecodeError;

    fn try_from(digit: i64) -> Result<Self, Self::Error> {
        match digit {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            2 => Ok(Mode::Relative),
            other => Err(DecodeError::InvalidMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_modes() {
        for &mode in &ALL_MODES {
            assert_eq!(Mode::try_from(mode as i64), Ok(mode));
        }
    }

    #[test]
    fn rejects_other_digits() {
        assert_eq!(Mode::try_from(3), Err(DecodeError::InvalidMode(3)));
        assert_eq!(Mode::try_from(9), Err(DecodeError::InvalidMode(9)));
        assert_eq!(Mode::try_from(-1), Err(DecodeError::InvalidMode(-1)));
    }
}
