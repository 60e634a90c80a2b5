//! Operand resolution for the three addressing modes.

use crate::error::RuntimeError;
use crate::memory::Memory;
use intcode_common::{Mode, Word};

/// Location of an operand, used when reporting a bad mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// Address of the instruction word.
    pub at: usize,
    /// Operand index within the instruction.
    pub arg: usize,
}

fn mode(site: Site, digit: i64) -> Result<Mode, RuntimeError> {
    Mode::try_from(digit).map_err(|_| RuntimeError::InvalidAddressingMode {
        at: site.at,
        arg: site.arg,
        mode: digit,
    })
}

/// Compute the value an operand denotes.
///
/// - position: `memory[raw]`
/// - immediate: `raw`
/// - relative: `memory[relative_base + raw]`
pub fn resolve_value(
    site: Site,
    digit: i64,
    raw: &Word,
    memory: &Memory,
    relative_base: &Word,
) -> Result<Word, RuntimeError> {
    match mode(site, digit)? {
        Mode::Position => memory.read(raw),
        Mode::Immediate => Ok(raw.clone()),
        Mode::Relative => memory.read(&(relative_base + raw)),
    }
}

/// Compute the address a write-target operand denotes.
///
/// Immediate mode is rejected: a literal has no address.
pub fn resolve_target(
    site: Site,
    digit: i64,
    raw: &Word,
    relative_base: &Word,
) -> Result<Word, RuntimeError> {
    match mode(site, digit)? {
        Mode::Position => Ok(raw.clone()),
        Mode::Relative => Ok(relative_base + raw),
        Mode::Immediate => Err(RuntimeError::InvalidAddressingMode {
            at: site.at,
            arg: site.arg,
            mode: digit,
        }),
    }
}
