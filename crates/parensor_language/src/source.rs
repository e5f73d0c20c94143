//! Program text parsing.
//!
//! Program text is laid out as a grid: each line is a row (axis 1) and each
//! whitespace-separated token is a column (axis 0).
//!
//! - `(` and `)` become group markers.
//! - Any other token is looked up in the name table, then parsed as an
//!   integer.
//! - A token starting with `/` turns its whole line into a comment. Comment
//!   lines do not take up a row; blank lines do.
//!
//! Cells on the first row are stored at single-axis coordinates `{x}`, later
//! rows at `{x, y}`.

use parensor_foundation::{Cell, Coordinates, Error, Result};
use parensor_storage::Layer;
use tracing::debug;

use crate::names::NameTable;

/// Parses program text that uses plain integers for opcodes.
///
/// # Errors
/// Returns a parse error naming the line and column of the first token that
/// is neither a group marker nor an integer.
pub fn parse_program(text: &str) -> Result<Layer> {
    parse_program_with_names(text, None)
}

/// Parses program text, resolving words through an optional name table.
///
/// # Errors
/// Returns a parse error naming the line and column of the first token that
/// is not a group marker, a table word, or an integer.
pub fn parse_program_with_names(text: &str, names: Option<&NameTable>) -> Result<Layer> {
    let text = text.replace("\r\n", "\n");
    let mut layer = Layer::new();
    let mut row: i64 = 0;

    for (line_index, line) in text.lines().enumerate() {
        if line.split_whitespace().any(|token| token.starts_with('/')) {
            continue;
        }

        let mut column: i64 = 0;
        for token in line.split_whitespace() {
            let Some(cell) = parse_token(token, names) else {
                return Err(Error::parse(
                    format!("could not parse cell, found '{token}'"),
                    position(line_index),
                    position(usize::try_from(column).unwrap_or(usize::MAX)),
                    line,
                ));
            };

            let coordinates = if row == 0 {
                Coordinates::from(column)
            } else {
                Coordinates::from([column, row])
            };
            layer.set(&coordinates, cell);
            column += 1;
        }

        row += 1;
    }

    debug!(
        cells = layer.len(),
        dimensions = ?layer.dimensions(),
        "parsed program"
    );

    Ok(layer)
}

fn parse_token(token: &str, names: Option<&NameTable>) -> Option<Cell> {
    match token {
        "(" => Some(Cell::OpenGroup),
        ")" => Some(Cell::CloseGroup),
        _ => names
            .and_then(|table| table.lookup(token))
            .map(|opcode| Cell::Integer(opcode.number()))
            .or_else(|| token.parse::<i64>().ok().map(Cell::Integer)),
    }
}

/// Converts a 0-based index to a 1-based position.
fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
