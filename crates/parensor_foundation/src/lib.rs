//! Core types for Parensor.
//!
//! This crate provides:
//! - [`Coordinates`] - Variable-length positions with zero-padded equality
//! - [`Cell`] - The unit of storage: an integer or a group marker
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod coordinates;
pub mod error;

pub use cell::Cell;
pub use coordinates::Coordinates;
pub use error::{Error, ErrorContext, ErrorKind, ExecutionLimit};

/// Result type alias using the Parensor [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
