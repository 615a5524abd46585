//! Step resolution: where the path goes from the current cell.
//!
//! The decision is split into three rules (first step, straight ahead, turn)
//! behind the [`StepRules`] trait. [`next_step`] composes them in a fixed order:
//!
//! 1. With no previous position the path is leaving the start marker, and
//!    exactly one neighbor may continue it.
//! 2. Otherwise, unless standing on a junction, keep going straight if the
//!    cell ahead can be stepped on. Letters sitting mid-segment are crossed
//!    this way.
//! 3. If going straight failed on a junction or letter, turn onto the one
//!    neighbor lying on the other axis.
//!
//! Anything else is a broken path.

use crate::chars::{is_capital_letter, is_junction, is_valid_forward};
use crate::error::{Result, TraceError};
use crate::grid::Grid;
use crate::neighbors::neighbors;
use crate::position::{direction_between, Position};

/// The individual rules [`next_step`] chooses between
pub trait StepRules {
    /// Leave the start marker
    fn first_step(&self, grid: &Grid, current: Position) -> Result<Position>;

    /// Continue in the direction `previous -> current`, or `None` if the cell
    /// ahead cannot be stepped on
    fn forward_step(
        &self,
        grid: &Grid,
        current: Position,
        previous: Position,
    ) -> Result<Option<Position>>;

    /// Turn onto the perpendicular axis
    fn turn_step(&self, grid: &Grid, current: Position, previous: Position) -> Result<Position>;
}

/// Rules used by the tracer unless told otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StepRules for StandardRules {
    fn first_step(&self, grid: &Grid, current: Position) -> Result<Position> {
        let current = current.ensure_valid()?;
        match neighbors(grid, current, is_valid_forward).as_slice() {
            [] => Err(TraceError::BrokenPath { at: current }),
            [next] => Ok(*next),
            _ => Err(TraceError::MultipleStartingPaths { at: current }),
        }
    }

    fn forward_step(
        &self,
        grid: &Grid,
        current: Position,
        previous: Position,
    ) -> Result<Option<Position>> {
        let direction = direction_between(previous, current)?;
        let Some(next) = current.offset(direction) else {
            return Ok(None);
        };
        Ok(grid.get(next).filter(|&c| is_valid_forward(c)).map(|_| next))
    }

    fn turn_step(&self, grid: &Grid, current: Position, previous: Position) -> Result<Position> {
        let came_horizontally = is_moving_horizontally(previous, current);

        let turns: Vec<Position> = neighbors(grid, current, is_valid_forward)
            .into_iter()
            .filter(|&n| {
                if came_horizontally {
                    is_moving_vertically(current, n)
                } else {
                    is_moving_horizontally(current, n)
                }
            })
            .collect();

        match turns.as_slice() {
            [] => Err(TraceError::FakeTurn { at: current }),
            [next] => Ok(*next),
            _ => Err(TraceError::ForkInPath { at: current }),
        }
    }
}

/// Same row, different column
pub fn is_moving_horizontally(from: Position, to: Position) -> bool {
    from.row == to.row && from.col != to.col
}

/// Same column, different row
pub fn is_moving_vertically(from: Position, to: Position) -> bool {
    from.col == to.col && from.row != to.row
}

/// Resolve the position after `current`
pub fn next_step<R: StepRules + ?Sized>(
    rules: &R,
    grid: &Grid,
    current: Position,
    previous: Option<Position>,
) -> Result<Position> {
    let Some(previous) = previous else {
        return rules.first_step(grid, current);
    };

    let c = grid
        .get(current)
        .ok_or(TraceError::CharacterNotFound { at: current })?;

    if !is_junction(c) {
        if let Some(next) = rules.forward_step(grid, current, previous)? {
            return Ok(next);
        }
    }

    if is_junction(c) || is_capital_letter(c) {
        return rules.turn_step(grid, current, previous);
    }

    Err(TraceError::BrokenPath { at: current })
}
