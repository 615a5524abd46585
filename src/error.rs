//! Failures that reject a map.
//!
//! Every variant is terminal: a map that produces one is not a valid path
//! map and there is no partial result to recover.

use crate::position::Position;

pub type Result<T, E = TraceError> = std::result::Result<T, E>;

/// Error type for map validation and traversal.
///
/// The `Display` text of each variant is the canonical message for its kind.
/// Variants raised while standing on a cell carry that cell as `at`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Invalid map")]
    InvalidGrid,
    #[error("Invalid character")]
    InvalidCharacter,
    #[error("Invalid position")]
    InvalidPosition { at: Position },
    #[error("Start or end not found")]
    StartOrEndNotFound,
    #[error("Multiple start or end characters found")]
    MultipleStartOrEnd,
    #[error("Character not found at current position")]
    CharacterNotFound { at: Position },
    #[error("Broken path")]
    BrokenPath { at: Position },
    #[error("Multiple starting paths")]
    MultipleStartingPaths { at: Position },
    #[error("Fake turn")]
    FakeTurn { at: Position },
    #[error("Fork in path")]
    ForkInPath { at: Position },
    #[error("Path did not terminate")]
    PathDidNotTerminate { steps: usize },
}

/// Fieldless discriminant of [`TraceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidGrid,
    InvalidCharacter,
    InvalidPosition,
    StartOrEndNotFound,
    MultipleStartOrEnd,
    CharacterNotFound,
    BrokenPath,
    MultipleStartingPaths,
    FakeTurn,
    ForkInPath,
    PathDidNotTerminate,
}

impl TraceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TraceError::InvalidGrid => ErrorKind::InvalidGrid,
            TraceError::InvalidCharacter => ErrorKind::InvalidCharacter,
            TraceError::InvalidPosition { .. } => ErrorKind::InvalidPosition,
            TraceError::StartOrEndNotFound => ErrorKind::StartOrEndNotFound,
            TraceError::MultipleStartOrEnd => ErrorKind::MultipleStartOrEnd,
            TraceError::CharacterNotFound { .. } => ErrorKind::CharacterNotFound,
            TraceError::BrokenPath { .. } => ErrorKind::BrokenPath,
            TraceError::MultipleStartingPaths { .. } => ErrorKind::MultipleStartingPaths,
            TraceError::FakeTurn { .. } => ErrorKind::FakeTurn,
            TraceError::ForkInPath { .. } => ErrorKind::ForkInPath,
            TraceError::PathDidNotTerminate { .. } => ErrorKind::PathDidNotTerminate,
        }
    }

    /// Cell the traversal was standing on when it failed, if any
    pub fn position(&self) -> Option<Position> {
        match *self {
            TraceError::InvalidPosition { at }
            | TraceError::CharacterNotFound { at }
            | TraceError::BrokenPath { at }
            | TraceError::MultipleStartingPaths { at }
            | TraceError::FakeTurn { at }
            | TraceError::ForkInPath { at } => Some(at),
            _ => None,
        }
    }
}
