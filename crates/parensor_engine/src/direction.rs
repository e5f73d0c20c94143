//! Per-axis movement of the instruction cursor.

use parensor_foundation::Coordinates;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the instruction cursor moves along one axis each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Stay put.
    Neutral = 0,
    /// Move one cell forward.
    #[default]
    Incremental = 1,
    /// Move one cell backward.
    Decremental = 2,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: i64 = 3;

    /// Decodes an operand; negative values wrap forward.
    #[must_use]
    pub fn from_operand(operand: i64) -> Self {
        match operand.rem_euclid(Self::COUNT) {
            0 => Self::Neutral,
            1 => Self::Incremental,
            _ => Self::Decremental,
        }
    }

    /// The per-step offset along this axis.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Neutral => 0,
            Self::Incremental => 1,
            Self::Decremental => -1,
        }
    }
}

/// Converts a direction vector into the offset applied each step.
#[must_use]
pub fn movement(directions: &[Direction]) -> Coordinates {
    directions.iter().map(|direction| direction.offset()).collect()
}
