//! Grid coordinates and unit directions between them.
//!
//! Coordinates are signed so that stepping off the top or left edge yields
//! a representable (but invalid) position instead of wrapping.

use std::fmt;

use crate::error::{Result, TraceError};

/// A cell on the grid, `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Both coordinates are non-negative
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Return the position one `direction` step away, or `None` if a
    /// coordinate would overflow
    pub fn offset(&self, direction: Direction) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(direction.vertical)?,
            col: self.col.checked_add(direction.horizontal)?,
        })
    }

    pub(crate) fn ensure_valid(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(TraceError::InvalidPosition { at: self })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

/// Delta between two positions, `(vertical, horizontal)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub vertical: i32,
    pub horizontal: i32,
}

impl Direction {
    pub const UP: Direction = Direction::new(-1, 0);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const RIGHT: Direction = Direction::new(0, 1);

    /// The four unit steps in neighbor order: up, down, left, right
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
    ];

    pub const fn new(vertical: i32, horizontal: i32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Unit step left or right
    pub fn is_horizontal(&self) -> bool {
        self.vertical == 0 && self.horizontal.abs() == 1
    }

    /// Unit step up or down
    pub fn is_vertical(&self) -> bool {
        self.horizontal == 0 && self.vertical.abs() == 1
    }

    /// Unit step along exactly one axis. Zero, diagonal and longer deltas are not.
    pub fn is_axis_aligned(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }
}

/// Component-wise `to - from`
pub fn direction_between(from: Position, to: Position) -> Result<Direction> {
    let from = from.ensure_valid()?;
    let to = to.ensure_valid()?;
    Ok(Direction::new(to.row - from.row, to.col - from.col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        let d = direction_between(Position::new(2, 3), Position::new(2, 4)).unwrap();
        assert_eq!(d, Direction::RIGHT);

        let d = direction_between(Position::new(2, 3), Position::new(1, 3)).unwrap();
        assert_eq!(d, Direction::UP);

        // Not adjacent: still a plain subtraction
        let d = direction_between(Position::new(0, 0), Position::new(3, 0)).unwrap();
        assert_eq!(d, Direction::new(3, 0));
    }

    #[test]
    fn test_direction_between_negative() {
        let err = direction_between(Position::new(-1, 0), Position::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            TraceError::InvalidPosition {
                at: Position::new(-1, 0)
            }
        );
        assert!(direction_between(Position::new(0, 0), Position::new(0, -2)).is_err());
    }

    #[test]
    fn test_axis_alignment() {
        for d in Direction::ORTHOGONAL {
            assert!(d.is_axis_aligned());
        }
        assert!(Direction::LEFT.is_horizontal());
        assert!(!Direction::LEFT.is_vertical());
        assert!(Direction::DOWN.is_vertical());
        assert!(!Direction::new(0, 0).is_axis_aligned());
        assert!(!Direction::new(1, 1).is_axis_aligned());
        assert!(!Direction::new(0, 2).is_axis_aligned());
    }

    #[test]
    fn test_offset() {
        let p = Position::new(0, 0);
        assert_eq!(p.offset(Direction::DOWN), Some(Position::new(1, 0)));
        assert_eq!(p.offset(Direction::UP), Some(Position::new(-1, 0)));
        assert_eq!(p.offset(Direction::LEFT).map(|p| p.is_valid()), Some(false));
    }

    #[test]
    fn test_offset_overflow() {
        let p = Position::new(i32::MAX, 0);
        assert_eq!(p.offset(Direction::DOWN), None);
        assert_eq!(p.offset(Direction::UP), Some(Position::new(i32::MAX - 1, 0)));
        assert_eq!(Position::new(0, i32::MAX).offset(Direction::RIGHT), None);
        assert_eq!(
            Position::new(0, 0).offset(Direction::new(0, i32::MAX)),
            Some(Position::new(0, i32::MAX))
        );
    }
}
