//! Start and end marker validation.

use log::debug;

use crate::chars::{END, START};
use crate::error::{Result, TraceError};
use crate::grid::Grid;
use crate::position::Position;

/// Locate the unique start and end markers.
///
/// A missing marker is reported before a duplicated one.
pub fn validate_start_and_end(grid: &Grid) -> Result<(Position, Position)> {
    let starts = grid.find_all(START)?;
    let ends = grid.find_all(END)?;
    debug!("found {} start and {} end markers", starts.len(), ends.len());

    let (start, end) = match (starts.as_slice(), ends.as_slice()) {
        ([], _) | (_, []) => return Err(TraceError::StartOrEndNotFound),
        ([start], [end]) => (*start, *end),
        _ => return Err(TraceError::MultipleStartOrEnd),
    };

    Ok((start.ensure_valid()?, end.ensure_valid()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let grid = Grid::new("  @\n\n -x");
        assert_eq!(
            validate_start_and_end(&grid),
            Ok((Position::new(0, 2), Position::new(2, 2)))
        );
    }

    #[test]
    fn test_validate_missing() {
        assert_eq!(
            validate_start_and_end(&Grid::new("--x")),
            Err(TraceError::StartOrEndNotFound)
        );
        assert_eq!(
            validate_start_and_end(&Grid::new("@--")),
            Err(TraceError::StartOrEndNotFound)
        );
        // Missing wins over duplicated
        assert_eq!(
            validate_start_and_end(&Grid::new("@-@")),
            Err(TraceError::StartOrEndNotFound)
        );
    }

    #[test]
    fn test_validate_multiple() {
        assert_eq!(
            validate_start_and_end(&Grid::new("@-x\n@-+")),
            Err(TraceError::MultipleStartOrEnd)
        );
        assert_eq!(
            validate_start_and_end(&Grid::new("x-@-x")),
            Err(TraceError::MultipleStartOrEnd)
        );
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(
            validate_start_and_end(&Grid::new("")),
            Err(TraceError::InvalidGrid)
        );
        assert_eq!(
            validate_start_and_end(&Grid::from_rows(vec![Vec::new()])),
            Err(TraceError::StartOrEndNotFound)
        );
    }
}
