//! Bracket matching and operand collection.
//!
//! Starting just past an opening marker, the scan walks the layer with the
//! same wrapping movement the instruction cursor uses. Depth starts at 1;
//! `(` deepens it and `)` closes it. Integers seen at depth 1 are the
//! group's operands, in visiting order.
//!
//! The walk is a translation on a finite wrapped grid, so it always comes
//! back around. Reaching the opening marker again (or, for an opening that
//! lies outside the layer's bounds, the first scanned cell) before depth
//! returns to 0 means the group is unmatched.

use parensor_foundation::{Cell, Coordinates, Error, Result};
use parensor_storage::Layer;

/// A matched group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupMatch {
    /// Position of the closing marker.
    pub closing: Coordinates,
    /// Integers found directly inside the group.
    pub operands: Vec<i64>,
}

impl GroupMatch {
    /// The operands as a coordinate vector.
    #[must_use]
    pub fn operand_coordinates(&self) -> Coordinates {
        Coordinates::from(self.operands.as_slice())
    }
}

/// Finds the closing marker for the group opened at `opening`.
///
/// Unmaterialized cells read as `Integer(0)`. The layer is not modified.
///
/// # Errors
/// Returns an unmatched group error if the scan cycles before the group
/// closes.
pub fn match_group(layer: &Layer, opening: &Coordinates, movement: &Coordinates) -> Result<GroupMatch> {
    let mut depth: usize = 1;
    let mut operands = Vec::new();
    let mut current = opening.clone();
    let mut first: Option<Coordinates> = None;

    loop {
        current.increment(movement, layer.dimensions());

        if current == *opening || first.as_ref() == Some(&current) {
            return Err(Error::unmatched_group(opening.clone()));
        }
        if first.is_none() {
            first = Some(current.clone());
        }

        match layer.peek(&current).copied().unwrap_or_default() {
            Cell::OpenGroup => depth += 1,
            Cell::CloseGroup => {
                depth -= 1;
                if depth == 0 {
                    return Ok(GroupMatch {
                        closing: current,
                        operands,
                    });
                }
            }
            Cell::Integer(n) if depth == 1 => operands.push(n),
            Cell::Integer(_) => {}
        }
    }
}
