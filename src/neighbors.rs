//! Orthogonal neighbor lookup with axis compatibility.

use crate::chars::*;
use crate::grid::Grid;
use crate::position::{Direction, Position};

/// Check if `c` may be entered by travelling in `direction`.
///
/// Junctions, letters and the end marker accept any axis; `-` only accepts
/// left/right and `|` only up/down. Non-unit deltas are never compatible.
pub fn is_compatible(c: char, direction: Direction) -> bool {
    if !direction.is_axis_aligned() {
        return false;
    }
    if is_junction(c) || is_capital_letter(c) || is_end(c) {
        return true;
    }
    if direction.is_horizontal() {
        c == HORIZONTAL
    } else {
        c == VERTICAL
    }
}

/// Neighbors of `pos` (up, down, left, right) whose character passes `accept`
/// and is compatible with the direction of travel into it
pub fn neighbors(grid: &Grid, pos: Position, accept: impl Fn(char) -> bool) -> Vec<Position> {
    if !pos.is_valid() {
        return Vec::new();
    }

    Direction::ORTHOGONAL
        .iter()
        .filter_map(|&dir| {
            let next = pos.offset(dir)?;
            let c = grid.get(next)?;
            (accept(c) && is_compatible(c, dir)).then_some(next)
        })
        .collect()
}
