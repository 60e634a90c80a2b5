//! Growable word memory.
//!
//! The loaded image is stored densely. Writes past its end land in a sparse
//! overlay, so touching a far address costs one entry rather than a
//! zero-filled run. Reads of unwritten cells yield zero either way.

use crate::config::Limits;
use crate::error::RuntimeError;
use intcode_common::{Program, Word};
use num_traits::{Signed, ToPrimitive};
use std::collections::BTreeMap;

/// The memory image owned by one machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Memory {
    image: Vec<Word>,
    extended: BTreeMap<usize, Word>,
    limits: Limits,
}

impl Memory {
    /// Create memory holding `cells`, with default limits.
    pub fn new(cells: Vec<Word>) -> Self {
        Self::with_limits(cells, Limits::default())
    }

    /// Create memory holding `cells` under the given limits.
    pub fn with_limits(cells: Vec<Word>, limits: Limits) -> Self {
        Self {
            image: cells,
            extended: BTreeMap::new(),
            limits,
        }
    }

    /// Validate a word as an address.
    pub fn address(&self, address: &Word) -> Result<usize, RuntimeError> {
        if address.is_negative() {
            return Err(RuntimeError::NegativeAddress {
                address: address.clone(),
            });
        }
        let ceiling = self.limits.ceiling();
        match address.to_usize() {
            Some(index) if index <= ceiling => Ok(index),
            _ => Err(RuntimeError::AddressOverflow {
                address: address.clone(),
                limit: ceiling,
            }),
        }
    }

    /// Read the word at `address`. Unwritten cells read as zero.
    pub fn read(&self, address: &Word) -> Result<Word, RuntimeError> {
        let index = self.address(address)?;
        Ok(self.get(index))
    }

    /// Read the word at an already-validated index.
    pub fn get(&self, index: usize) -> Word {
        self.image
            .get(index)
            .or_else(|| self.extended.get(&index))
            .cloned()
            .unwrap_or_default()
    }

    /// Store `value` at `address`, growing memory if needed.
    pub fn write(&mut self, address: &Word, value: Word) -> Result<(), RuntimeError> {
        let index = self.address(address)?;
        match self.image.get_mut(index) {
            Some(cell) => *cell = value,
            None => {
                self.extended.insert(index, value);
            }
        }
        Ok(())
    }

    /// One past the highest cell loaded or written.
    pub fn len(&self) -> usize {
        match self.extended.last_key_value() {
            Some((&highest, _)) => self.image.len().max(highest + 1),
            None => self.image.len(),
        }
    }

    /// Returns true if no cell has been loaded or written.
    pub fn is_empty(&self) -> bool {
        self.image.is_empty() && self.extended.is_empty()
    }

    /// The limits this memory enforces.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Snapshot the current image as a program, zero-filling gaps.
    ///
    /// This allocates every cell up to [`len`](Self::len).
    pub fn to_program(&self) -> Program {
        Program::new((0..self.len()).map(|index| self.get(index)).collect())
    }
}

impl From<Program> for Memory {
    fn from(program: Program) -> Self {
        Self::new(program.into_cells())
    }
}

impl PartialEq<Program> for Memory {
    fn eq(&self, other: &Program) -> bool {
        self.len() == other.len()
            && other
                .cells()
                .iter()
                .enumerate()
                .all(|(index, cell)| self.get(index) == *cell)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A write touches exactly one cell and every skipped cell reads zero.
        #[test]
        fn write_grows_by_zero_fill(
            cells in prop::collection::vec(any::<i64>(), 0..32),
            addr in 0usize..256,
            value in any::<i64>(),
        ) {
            let mut mem = Memory::from(Program::from_i64s(&cells));
            mem.write(&Word::from(addr), Word::from(value)).unwrap();

            prop_assert_eq!(mem.len(), cells.len().max(addr + 1));
            prop_assert_eq!(mem.get(addr), Word::from(value));
            for index in 0..mem.len() {
                if index == addr {
                    continue;
                }
                let before = cells.get(index).copied().unwrap_or(0);
                prop_assert_eq!(mem.get(index), Word::from(before));
            }
        }
    }
}
