//! Engine state snapshots using `MessagePack`.
//!
//! A snapshot records every layer, both cursors, the direction vector, and
//! the number of steps taken. Loading one and resuming with
//! [`Engine::from_state`] continues the program where it stopped.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use parensor_engine::{Engine, EngineState};
use parensor_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// Bumped whenever the encoded layout changes.
pub const SNAPSHOT_FORMAT: u32 = 1;

/// A saved engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Layout version, checked on load.
    pub format: u32,
    /// Steps completed when the snapshot was taken.
    pub steps: u64,
    /// The engine state.
    pub state: EngineState,
}

impl Snapshot {
    /// Captures the current state of `engine`.
    #[must_use]
    pub fn capture(engine: &Engine) -> Self {
        Self {
            format: SNAPSHOT_FORMAT,
            steps: engine.steps(),
            state: engine.state().clone(),
        }
    }

    /// Builds an engine that resumes from this snapshot.
    ///
    /// The step counter restarts at zero.
    #[must_use]
    pub fn into_engine(self) -> Engine {
        Engine::from_state(self.state)
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the snapshot was written
/// in a different format.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    let snapshot: Snapshot = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?;

    if snapshot.format != SNAPSHOT_FORMAT {
        return Err(Error::new(ErrorKind::SerializationError(format!(
            "unsupported snapshot format {} (expected {SNAPSHOT_FORMAT})",
            snapshot.format
        ))));
    }

    Ok(snapshot)
}

/// Saves a snapshot to a file, creating or overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(snapshot)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
