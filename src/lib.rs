//! Parensor - a multidimensional, self-modifying esoteric language
//!
//! This crate re-exports all layers of the Parensor interpreter for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: parensor_runtime    - CLI, program runner, state snapshots
//! Layer 3: parensor_engine     - Cursors, bracket matching, opcode dispatch
//! Layer 2: parensor_language   - Opcodes, name tables, program text parser
//! Layer 1: parensor_storage    - Sparse tensors and layer space
//! Layer 0: parensor_foundation - Core types (Coordinates, Cell, Error)
//! ```

pub use parensor_engine as engine;
pub use parensor_foundation as foundation;
pub use parensor_language as language;
pub use parensor_runtime as runtime;
pub use parensor_storage as storage;
