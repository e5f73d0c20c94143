//! Sparse, auto-expanding multidimensional storage for Parensor.
//!
//! This crate provides:
//! - [`SparseTensor`] - Coordinate-addressed storage with growing dimension bounds
//! - [`Handle`] - A probe result that can be resolved without a second search
//! - [`Layer`] and [`LayerSpace`] - A tensor of cells, and a tensor of layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod layer;
pub mod tensor;

pub use layer::{Layer, LayerSpace};
pub use tensor::{Handle, SparseTensor};
