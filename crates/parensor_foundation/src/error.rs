//! Error types for the Parensor system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::coordinates::Coordinates;

/// The main error type for Parensor operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error at a 1-indexed line and column.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: &str) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
            context: context.to_string(),
        })
    }

    /// Creates an error for an opcode whose operand group does not start
    /// where it must.
    #[must_use]
    pub fn missing_open_group(at: Coordinates) -> Self {
        Self::new(ErrorKind::MissingOpenGroup { at })
    }

    /// Creates an error for a group whose closing marker was never reached.
    #[must_use]
    pub fn unmatched_group(opening: Coordinates) -> Self {
        Self::new(ErrorKind::UnmatchedGroup { opening })
    }

    /// Creates a stale handle error.
    #[must_use]
    pub fn stale_handle(handle_generation: u64, current_generation: u64) -> Self {
        Self::new(ErrorKind::StaleHandle {
            handle_generation,
            current_generation,
        })
    }

    /// Creates an execution limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: ExecutionLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an I/O error with a description of what failed.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Renders the error together with its context and, for parse errors,
    /// the offending source line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = self.to_string();

        if let Some(context) = &self.context {
            let shown = context.to_string();
            if shown.starts_with("at ") {
                report.push(' ');
            }
            report.push_str(shown.trim_end());
        }

        if let ErrorKind::ParseError { context, .. } = &self.kind {
            if !context.is_empty() {
                report.push_str("\n  | ");
                report.push_str(context);
            }
        }

        report
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A program or name-table token could not be parsed.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed, counted in tokens).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A word appears more than once in a name table.
    #[error("duplicate name in name table: {0}")]
    DuplicateName(String),

    /// A name-table word contains a group marker character.
    #[error("name table word {0:?} contains a reserved character")]
    ReservedCharacter(String),

    /// A name table does not hold exactly one word per opcode.
    #[error("name table needs {expected} words, found {actual}")]
    NameCount {
        /// Number of opcodes.
        expected: usize,
        /// Number of words supplied.
        actual: usize,
    },

    /// A structured opcode was not followed by an opening group marker.
    #[error("expected an opening group marker at {at}")]
    MissingOpenGroup {
        /// Where the marker was expected.
        at: Coordinates,
    },

    /// Scanning for a closing marker cycled back to the opening one.
    #[error("no closing group marker for the group opened at {opening}")]
    UnmatchedGroup {
        /// Position of the opening marker.
        opening: Coordinates,
    },

    /// A handle was resolved after its container was reset.
    #[error("stale handle: acquired at generation {handle_generation}, container is at {current_generation}")]
    StaleHandle {
        /// Generation recorded when the handle was acquired.
        handle_generation: u64,
        /// Generation of the container at resolution time.
        current_generation: u64,
    },

    /// An execution limit (kill switch) was triggered.
    #[error("limit exceeded: {0}")]
    LimitExceeded(ExecutionLimit),

    /// Reading input, writing output, or file access failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Execution limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionLimit {
    /// Maximum number of steps exceeded.
    MaxSteps {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for ExecutionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSteps { limit } => write!(f, "max steps ({limit}) exceeded"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<u32>,
    /// Column number in source (1-indexed, counted in tokens).
    pub column: Option<u32>,
    /// Frames describing what was running, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
