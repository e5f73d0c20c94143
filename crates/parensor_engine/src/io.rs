//! Input and output for running programs.
//!
//! The engine reads integers and writes cells through [`EngineIo`]. Reads
//! that find no integer (end of input, or a token that is not a number)
//! yield 0, matching how a failed stream extraction behaves.

use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Stdout, Write};

use parensor_foundation::{Cell, Error, Result};
use tracing::warn;

/// Source of user input and sink for program output.
pub trait EngineIo {
    /// Blocks until one integer is available.
    ///
    /// # Errors
    /// Returns an error if the underlying reader fails.
    fn read_integer(&mut self) -> Result<i64>;

    /// Emits one cell.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn write_cell(&mut self, cell: Cell) -> Result<()>;
}

// =============================================================================
// Stream I/O
// =============================================================================

/// Reads whitespace-delimited integers from a reader and writes each cell
/// followed by a space to a writer.
pub struct StreamIo<R, W> {
    reader: R,
    writer: W,
    /// Tokens read from the current line but not yet consumed.
    pending: VecDeque<String>,
}

impl StreamIo<StdinLock<'static>, Stdout> {
    /// Standard input and standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<W: Write> StreamIo<StdinLock<'static>, W> {
    /// Standard input and a custom writer.
    #[must_use]
    pub fn stdin_to(writer: W) -> Self {
        Self::new(std::io::stdin().lock(), writer)
    }
}

impl<R: BufRead, W: Write> StreamIo<R, W> {
    /// Creates stream I/O over a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush output: {e}")))?;
        Ok(self.writer)
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Invalid UTF-8 becomes replacement characters, which then fail to
            // parse as integers like any other bad token.
            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::io(format!("failed to read input: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

impl<R: BufRead, W: Write> EngineIo for StreamIo<R, W> {
    fn read_integer(&mut self) -> Result<i64> {
        // Prompted output must be visible before blocking on input.
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush output: {e}")))?;

        match self.next_token()? {
            Some(token) => Ok(token.parse().unwrap_or_else(|_| {
                warn!(%token, "input is not an integer, reading 0");
                0
            })),
            None => {
                warn!("input exhausted, reading 0");
                Ok(0)
            }
        }
    }

    fn write_cell(&mut self, cell: Cell) -> Result<()> {
        write!(self.writer, "{cell} ").map_err(|e| Error::io(format!("failed to write output: {e}")))
    }
}

// =============================================================================
// Buffered I/O
// =============================================================================

/// Scripted input and captured output, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct BufferedIo {
    inputs: VecDeque<i64>,
    outputs: Vec<Cell>,
}

impl BufferedIo {
    /// Creates buffered I/O with no input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffered I/O that will answer reads with `inputs`, in order.
    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = i64>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    /// Cells written so far.
    #[must_use]
    pub fn outputs(&self) -> &[Cell] {
        &self.outputs
    }

    /// Output rendered the way [`StreamIo`] writes it.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.outputs.iter().map(|cell| format!("{cell} ")).collect()
    }

    /// Inputs not yet consumed.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl EngineIo for BufferedIo {
    fn read_integer(&mut self) -> Result<i64> {
        Ok(self.inputs.pop_front().unwrap_or_else(|| {
            warn!("input exhausted, reading 0");
            0
        }))
    }

    fn write_cell(&mut self, cell: Cell) -> Result<()> {
        self.outputs.push(cell);
        Ok(())
    }
}
