//! Cursors: a position inside a layer plus the layer selector.

use std::fmt;

use parensor_foundation::Coordinates;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell position within the layer chosen by `layer_index`.
///
/// Equality is zero-padded on both parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    /// Position within the selected layer.
    pub cell_index: Coordinates,
    /// Which layer is selected.
    pub layer_index: Coordinates,
}

impl Cursor {
    /// Creates a cursor.
    #[must_use]
    pub fn new(cell_index: impl Into<Coordinates>, layer_index: impl Into<Coordinates>) -> Self {
        Self {
            cell_index: cell_index.into(),
            layer_index: layer_index.into(),
        }
    }

    /// Where the instruction cursor starts: cell `{0}` of layer `{0}`.
    #[must_use]
    pub fn instruction_start() -> Self {
        Self::new(0, 0)
    }

    /// Where the data cursor starts: cell `{0}` of layer `{1}`.
    #[must_use]
    pub fn data_start() -> Self {
        Self::new(0, 1)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in layer {}", self.cell_index, self.layer_index)
    }
}
