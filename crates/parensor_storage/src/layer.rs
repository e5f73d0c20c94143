//! Layers of cells and the space that holds them.
//!
//! Every layer is an independent [`SparseTensor`] of [`Cell`]s with its own
//! bounds. The [`LayerSpace`] is itself a sparse tensor whose elements are
//! layers, owned by value, so resetting one layer never invalidates another.

use parensor_foundation::Cell;

use crate::tensor::SparseTensor;

/// One independently addressable program or data layer.
pub type Layer = SparseTensor<Cell>;

/// The tensor of all layers, addressed by layer index.
pub type LayerSpace = SparseTensor<Layer>;
