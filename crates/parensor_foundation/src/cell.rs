//! The unit of storage in every layer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell: an integer or one half of a group marker pair.
///
/// The default cell is `Integer(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// An integer value (data, or an opcode when interpreted as code).
    Integer(i64),
    /// The `(` marker that opens an operand group.
    OpenGroup,
    /// The `)` marker that closes an operand group.
    CloseGroup,
}

impl Cell {
    /// Returns the integer value, if this is an integer cell.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::OpenGroup | Self::CloseGroup => None,
        }
    }

    /// Returns true for `Integer(0)`; group markers are never zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Integer(0))
    }

    /// Returns true for the `(` marker.
    #[must_use]
    pub const fn is_open_group(self) -> bool {
        matches!(self, Self::OpenGroup)
    }

    /// Returns true for the `)` marker.
    #[must_use]
    pub const fn is_close_group(self) -> bool {
        matches!(self, Self::CloseGroup)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::OpenGroup => write!(f, "("),
            Self::CloseGroup => write!(f, ")"),
        }
    }
}
