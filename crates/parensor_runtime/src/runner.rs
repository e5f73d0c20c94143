//! Loading and running program files.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use parensor_engine::{Engine, EngineConfig, RunSummary, StreamIo};
use parensor_foundation::{Error, ErrorContext, ErrorKind, Result};
use parensor_language::{NameTable, parse_program_with_names};
use parensor_storage::Layer;
use tracing::{debug, info};

use crate::serialize::{Snapshot, save_to_file};

/// Resolved options for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Program text file.
    pub program: PathBuf,
    /// Where program output goes; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Name table file.
    pub words: Option<PathBuf>,
    /// Instruction limit.
    pub max_steps: Option<u64>,
    /// Where to write the final state snapshot.
    pub dump_state: Option<PathBuf>,
}

impl RunOptions {
    /// Options that run `program` with output on stdout.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Builder method to send output to a file.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Builder method to set the name table file.
    #[must_use]
    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = Some(path.into());
        self
    }

    /// Builder method to set the instruction limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Builder method to request a final state snapshot.
    #[must_use]
    pub fn with_dump_state(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_state = Some(path.into());
        self
    }

    fn engine_config(&self) -> EngineConfig {
        match self.max_steps {
            Some(limit) => EngineConfig::new().with_max_steps(limit),
            None => EngineConfig::new(),
        }
    }
}

fn read_text(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read {what} '{}': {e}", path.display())))
}

fn with_source(error: Error, path: &Path) -> Error {
    let mut context = ErrorContext::new().with_source(path.display().to_string());
    if let ErrorKind::ParseError { line, column, .. } = &error.kind {
        context = context.with_position(*line, *column);
    }
    error.with_context(context)
}

/// Reads and validates a name table file.
///
/// # Errors
/// Returns an error if the file cannot be read or the table is invalid.
pub fn load_names(path: &Path) -> Result<NameTable> {
    let text = read_text(path, "name table")?;
    NameTable::parse(&text).map_err(|e| with_source(e, path))
}

/// Reads and parses a program file, using the name table at `words` if given.
///
/// # Errors
/// Returns an error if either file cannot be read or fails to parse.
pub fn load_program(path: &Path, words: Option<&Path>) -> Result<Layer> {
    let names = words.map(load_names).transpose()?;
    let text = read_text(path, "program")?;
    parse_program_with_names(&text, names.as_ref()).map_err(|e| with_source(e, path))
}

/// Loads the program named in `options` and runs it to completion.
///
/// Input is read from stdin. When a snapshot is requested it is written
/// whether or not the run succeeded.
///
/// # Errors
/// Returns the first load, execution, I/O, or snapshot error.
pub fn run_file(options: &RunOptions) -> Result<RunSummary> {
    let program = load_program(&options.program, options.words.as_deref())?;
    let mut engine = Engine::new(program).with_config(options.engine_config());

    info!(program = %options.program.display(), "running");

    let outcome = match &options.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("failed to create output '{}': {e}", path.display()))
            })?;
            drive(&mut engine, StreamIo::stdin_to(BufWriter::new(file)))
        }
        None => drive(&mut engine, StreamIo::stdio()),
    };

    if let Some(path) = &options.dump_state {
        save_to_file(&Snapshot::capture(&engine), path)?;
        debug!(path = %path.display(), "state written");
    }

    outcome
}

/// Runs `engine` and flushes the output, even if the run failed.
fn drive<R: BufRead, W: Write>(engine: &mut Engine, mut io: StreamIo<R, W>) -> Result<RunSummary> {
    let outcome = engine.run(&mut io);
    io.finish()?;
    outcome
}
