//! CLI, program runner, and state snapshots for Parensor.
//!
//! This crate provides:
//! - [`run_file`] - Loads a program (and optional name table) and runs it
//! - [`Snapshot`] - `MessagePack` save and load of engine state
//! - [`init_logging`] - The subscriber the `parensor` binary installs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod runner;
pub mod serialize;

pub use logging::{DEFAULT_FILTER, init_logging};
pub use runner::{RunOptions, load_names, load_program, run_file};
pub use serialize::{Snapshot, from_bytes, load_from_file, save_to_file, to_bytes};
