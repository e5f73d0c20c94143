//! Positions in a space of unbounded dimensionality.
//!
//! A [`Coordinates`] value is an ordered list of signed integers, one per
//! axis. Coordinates of different lengths are compared as if the shorter one
//! were padded with trailing zeros, so `{1, 2}` and `{1, 2, 0}` name the same
//! position.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position with one signed integer per axis.
///
/// Equality and hashing ignore trailing zero axes.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    values: Vec<i64>,
}

impl Coordinates {
    /// Creates coordinates from per-axis values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// The single-axis origin `{0}`.
    #[must_use]
    pub fn origin() -> Self {
        Self { values: vec![0] }
    }

    /// Number of explicitly stored axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no axis is stored.
    ///
    /// An empty value still compares equal to the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value on `axis`, or 0 when the axis is not stored.
    #[must_use]
    pub fn get(&self, axis: usize) -> i64 {
        self.values.get(axis).copied().unwrap_or(0)
    }

    /// The stored per-axis values.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Iterates over the stored per-axis values.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Zero-padded equality.
    ///
    /// Compares element-wise up to the longer length, treating axes missing
    /// from the shorter operand as 0.
    #[must_use]
    pub fn equal(lhs: &Self, rhs: &Self) -> bool {
        let axes = lhs.len().max(rhs.len());
        (0..axes).all(|axis| lhs.get(axis) == rhs.get(axis))
    }

    /// Moves these coordinates by `by`, wrapping each axis into its bound.
    ///
    /// Every axis covered by either operand becomes
    /// `(self[i] + by[i]) mod bounds[i]`, where a missing bound is 1 and a
    /// missing operand axis is 0. The modulo is Euclidean, so results always
    /// lie in `[0, bound)` even when the sum is negative.
    pub fn increment(&mut self, by: &Self, bounds: &[i64]) -> &mut Self {
        let axes = self.len().max(by.len());
        self.values.resize(axes, 0);

        for (axis, value) in self.values.iter_mut().enumerate() {
            let bound = bounds.get(axis).copied().unwrap_or(1).max(1);
            *value = value.wrapping_add(by.get(axis)).rem_euclid(bound);
        }

        self
    }

    /// Returns a copy moved by `by` (see [`Coordinates::increment`]).
    #[must_use]
    pub fn incremented(&self, by: &Self, bounds: &[i64]) -> Self {
        let mut next = self.clone();
        next.increment(by, bounds);
        next
    }

    /// Stored values with trailing zero axes removed.
    fn significant(&self) -> &[i64] {
        let end = self
            .values
            .iter()
            .rposition(|&value| value != 0)
            .map_or(0, |last| last + 1);
        &self.values[..end]
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        Self::equal(self, other)
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl From<Vec<i64>> for Coordinates {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl From<&[i64]> for Coordinates {
    fn from(values: &[i64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Coordinates {
    fn from(values: [i64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<i64> for Coordinates {
    fn from(sole: i64) -> Self {
        Self::new(vec![sole])
    }
}

impl FromIterator<i64> for Coordinates {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates{self}")
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (axis, value) in self.values.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
