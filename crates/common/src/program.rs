//! Program images and their text form.
//!
//! The text form is a single line of comma-separated decimal integers with
//! no header. Surrounding whitespace (such as a trailing newline) is ignored.

use crate::error::ParseError;
use crate::Word;
use std::fmt;
use std::str::FromStr;

/// An Intcode program: the initial memory image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    cells: Vec<Word>,
}

impl Program {
    /// Create a program from memory cells.
    pub fn new(cells: Vec<Word>) -> Self {
        Self { cells }
    }

    /// Create a program from machine-sized integers.
    pub fn from_i64s(cells: &[i64]) -> Self {
        Self::new(cells.iter().copied().map(Word::from).collect())
    }

    /// Parse the comma-separated text form.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let cells = text
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<Word>().map_err(|_| ParseError::InvalidInteger {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// Return a copy of this program with one cell replaced.
    ///
    /// Addresses past the end are zero-filled up to `address`.
    pub fn with_cell(&self, address: usize, value: impl Into<Word>) -> Self {
        let mut cells = self.cells.clone();
        if address >= cells.len() {
            cells.resize(address + 1, Word::default());
        }
        cells[address] = value.into();
        Self { cells }
    }

    /// The memory cells, starting at address 0.
    pub fn cells(&self) -> &[Word] {
        &self.cells
    }

    /// Consume the program and return its cells.
    pub fn into_cells(self) -> Vec<Word> {
        self.cells
    }

    /// Number of cells in the image.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the image has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Word>> for Program {
    fn from(cells: Vec<Word>) -> Self {
        Self::new(cells)
    }
}

impl From<Vec<i64>> for Program {
    fn from(cells: Vec<i64>) -> Self {
        Self::from_i64s(&cells)
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
