//! Cursor-driven execution engine for Parensor.
//!
//! This crate provides:
//! - [`Engine`] - Owns all layers, both cursors, and the direction vector
//! - [`match_group`] - Bracket matching and operand collection
//! - [`EngineIo`] - The input/output seam, with stream and buffered implementations
//! - [`EngineConfig`] - Execution limits
//!
//! # Step Cycle
//!
//! ```text
//! remember instruction cursor
//!          │
//!          ▼
//! execute cell under cursor ──(error)──▶ halt with failure
//!          │
//!          ▼
//! advance cell index by direction vector
//!          │
//!          ▼
//! cursor unchanged? ──(yes)──▶ halt (fixed point)
//!          │ no
//!          └──────▶ next step
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cursor;
pub mod direction;
pub mod engine;
pub mod io;
pub mod matcher;

pub use config::EngineConfig;
pub use cursor::Cursor;
pub use direction::{Direction, movement};
pub use engine::{Engine, EngineState, RunSummary, StepOutcome};
pub use io::{BufferedIo, EngineIo, StreamIo};
pub use matcher::{GroupMatch, match_group};
