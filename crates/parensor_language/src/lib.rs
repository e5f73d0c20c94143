//! Opcode set, name tables, and program text parsing for Parensor.
//!
//! This crate provides:
//! - [`Opcode`] - The fixed instruction set
//! - [`NameTable`] - Optional words that stand in for opcode numbers
//! - [`parse_program`] - Turns program text into an instruction layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod names;
pub mod opcode;
pub mod source;


pub use names::NameTable;
pub use opcode::Opcode;
pub use source::{parse_program, parse_program_with_names};
