//! The Parensor instruction set.
//!
//! An integer cell under the instruction cursor selects the opcode whose
//! number equals the value modulo [`Opcode::COUNT`]. Structured opcodes read
//! their operands from the group that immediately follows them.

use std::fmt;

/// A single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Emit the current data cell.
    OutputCurrentData = 0,
    /// Move the data cursor within its layer by the operand vector.
    IncrementDataCursorCellIndex = 1,
    /// Point the data cursor at the layer named by the operand vector.
    SetDataCursorTensorIndex = 2,
    /// Add one to the current data cell.
    IncrementDataCell = 3,
    /// Subtract one from the current data cell.
    DecrementDataCell = 4,
    /// Replace the instruction cursor's direction vector.
    SetInstructionCursorDirection = 5,
    /// Read one integer from input into the current data cell.
    SetDataCellUserInput = 6,
    /// Jump when the current data cell is zero, then execute the target.
    ConditionalSetInstructionCursorCellIndex = 7,
    /// Write `(` into the current data cell.
    SetDataCellOpeningParens = 8,
    /// Write `)` into the current data cell.
    SetDataCellClosingParens = 9,
    /// Point the instruction cursor at the layer named by the operand vector.
    SetInstructionCursorTensorIndex = 10,
    /// Reset the layer named by the operand vector.
    ShrinkTensor = 11,
}

impl Opcode {
    /// Number of opcodes.
    pub const COUNT: usize = 12;

    /// Every opcode, in numeric order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::OutputCurrentData,
        Self::IncrementDataCursorCellIndex,
        Self::SetDataCursorTensorIndex,
        Self::IncrementDataCell,
        Self::DecrementDataCell,
        Self::SetInstructionCursorDirection,
        Self::SetDataCellUserInput,
        Self::ConditionalSetInstructionCursorCellIndex,
        Self::SetDataCellOpeningParens,
        Self::SetDataCellClosingParens,
        Self::SetInstructionCursorTensorIndex,
        Self::ShrinkTensor,
    ];

    /// Decodes a cell value. Negative values wrap forward.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn from_value(value: i64) -> Self {
        Self::ALL[value.rem_euclid(Self::COUNT as i64) as usize]
    }

    /// The opcode number.
    #[must_use]
    pub const fn number(self) -> i64 {
        self as i64
    }

    /// Returns true if this opcode reads an operand group.
    #[must_use]
    pub const fn takes_operands(self) -> bool {
        matches!(
            self,
            Self::IncrementDataCursorCellIndex
                | Self::SetDataCursorTensorIndex
                | Self::SetInstructionCursorDirection
                | Self::ConditionalSetInstructionCursorCellIndex
                | Self::SetInstructionCursorTensorIndex
                | Self::ShrinkTensor
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
