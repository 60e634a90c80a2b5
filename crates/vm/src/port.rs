//! Input sources and output sinks a machine is wired to.
//!
//! The engine only talks to the [`Input`] and [`Output`] traits. Readiness
//! is what lets the suspendable driver stop in front of an input
//! instruction instead of failing.

use crate::error::PortError;
use intcode_common::Word;
use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A source of input values.
pub trait Input {
    /// Whether [`consume`](Input::consume) would currently succeed.
    fn is_ready(&self) -> bool;

    /// Take the next value.
    fn consume(&mut self) -> Result<Word, PortError>;
}

/// A sink for output values.
pub trait Output {
    /// Append one value.
    fn emit(&mut self, value: Word) -> Result<(), PortError>;
}

impl<T: Input + ?Sized> Input for Box<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn consume(&mut self) -> Result<Word, PortError> {
        (**self).consume()
    }
}

impl<T: Input + ?Sized> Input for &mut T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn consume(&mut self) -> Result<Word, PortError> {
        (**self).consume()
    }
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn emit(&mut self, value: Word) -> Result<(), PortError> {
        (**self).emit(value)
    }
}

impl<T: Output + ?Sized> Output for &mut T {
    fn emit(&mut self, value: Word) -> Result<(), PortError> {
        (**self).emit(value)
    }
}

// ---- Inputs ----

/// Line-oriented interactive input: one integer per line.
///
/// Always reports ready; a read blocks on the underlying reader. End of
/// stream surfaces as [`PortError::Exhausted`].
#[derive(Debug)]
pub struct Interactive<R, W> {
    reader: R,
    prompt: Option<W>,
}

impl Interactive<StdinLock<'static>, Stdout> {
    /// Read from stdin, prompting with `?: ` on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), Some(io::stdout()))
    }
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Read from `reader`, writing a prompt to `prompt` before each value.
    pub fn new(reader: R, prompt: Option<W>) -> Self {
        Self { reader, prompt }
    }
}

impl<R: BufRead> Interactive<R, io::Sink> {
    /// Read from `reader` without prompting.
    pub fn silent(reader: R) -> Self {
        Self::new(reader, None)
    }
}

impl<R: BufRead, W: Write> Input for Interactive<R, W> {
    fn is_ready(&self) -> bool {
        true
    }

    fn consume(&mut self) -> Result<Word, PortError> {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.write_all(b"?: ")?;
            prompt.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PortError::Exhausted);
        }

        let text = line.trim();
        text.parse::<Word>()
            .map_err(|_| PortError::InvalidValue(text.to_string()))
    }
}

/// Pre-supplied values, consumed in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixed {
    values: VecDeque<Word>,
}

impl Fixed {
    /// Supply `values` up front.
    pub fn new<T: Into<Word>>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Input for Fixed {
    fn is_ready(&self) -> bool {
        !self.values.is_empty()
    }

    fn consume(&mut self) -> Result<Word, PortError> {
        self.values.pop_front().ok_or(PortError::Exhausted)
    }
}

/// A FIFO the caller keeps topping up between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    values: VecDeque<Word>,
}

impl Queue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue seeded with `values`.
    pub fn with_values<T: Into<Word>>(values: impl IntoIterator<Item = T>) -> Self {
        let mut queue = Self::new();
        queue.extend(values);
        queue
    }

    /// Append one value.
    pub fn push(&mut self, value: impl Into<Word>) {
        self.values.push_back(value.into());
    }

    /// Append several values, in order.
    pub fn extend<T: Into<Word>>(&mut self, values: impl IntoIterator<Item = T>) {
        self.values.extend(values.into_iter().map(Into::into));
    }

    /// Values waiting to be consumed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Input for Queue {
    fn is_ready(&self) -> bool {
        !self.values.is_empty()
    }

    fn consume(&mut self) -> Result<Word, PortError> {
        self.values.pop_front().ok_or(PortError::Exhausted)
    }
}

// ---- Outputs ----

/// Writes each value on its own line as soon as it is emitted.
#[derive(Debug)]
pub struct Printer<W> {
    writer: W,
}

impl Printer<Stdout> {
    /// Print to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    /// Print to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for Printer<W> {
    fn emit(&mut self, value: Word) -> Result<(), PortError> {
        writeln!(self.writer, "{value}")?;
        Ok(())
    }
}

/// Collects emitted values for the caller to drain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    values: Vec<Word>,
}

impl Captured {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything captured and not yet drained, oldest first.
    pub fn values(&self) -> &[Word] {
        &self.values
    }

    /// Remove and return everything captured so far.
    pub fn drain(&mut self) -> Vec<Word> {
        std::mem::take(&mut self.values)
    }

    /// Consume the buffer.
    pub fn into_values(self) -> Vec<Word> {
        self.values
    }

    /// Number of buffered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Output for Captured {
    fn emit(&mut self, value: Word) -> Result<(), PortError> {
        self.values.push(value);
        Ok(())
    }
}
