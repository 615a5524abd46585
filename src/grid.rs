//! Read-only character grid built from the map text.
//!
//! Rows keep their own length, so the grid may be jagged and may contain
//! empty rows. Lookups outside a row (or at negative coordinates) return
//! `None` rather than a padding character.

use crate::error::{Result, TraceError};
use crate::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Split `text` into rows on `\n` or `\r\n`.
    /// A trailing line break does not produce an extra row.
    pub fn new(text: &str) -> Self {
        let rows = text.lines().map(|line| line.chars().collect()).collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Character at `pos`, or `None` if the position is negative or past the
    /// end of the grid or of its row
    pub fn get(&self, pos: Position) -> Option<char> {
        if !pos.is_valid() {
            return None;
        }
        let row = self.rows.get(pos.row as usize)?;
        row.get(pos.col as usize).copied()
    }

    /// All positions holding `needle`, in row-major order
    pub fn find_all(&self, needle: char) -> Result<Vec<Position>> {
        if self.is_empty() {
            return Err(TraceError::InvalidGrid);
        }

        let mut positions = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == needle {
                    positions.push(position_at(y, x)?);
                }
            }
        }
        Ok(positions)
    }

    /// Like [`Grid::find_all`], for a needle given as text.
    /// The needle must be exactly one character.
    pub fn find_all_str(&self, needle: &str) -> Result<Vec<Position>> {
        let mut chars = needle.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.find_all(c),
            _ => Err(TraceError::InvalidCharacter),
        }
    }
}

/// Convert grid indices to a `Position`. Grids too large for `i32`
/// coordinates are rejected.
fn position_at(y: usize, x: usize) -> Result<Position> {
    let row = i32::try_from(y).map_err(|_| TraceError::InvalidGrid)?;
    let col = i32::try_from(x).map_err(|_| TraceError::InvalidGrid)?;
    Ok(Position::new(row, col))
}
