//! # asciipath
//!
//! Trace the single path drawn on an ASCII map.
//!
//! The path starts at `@`, ends at `x`, runs along `-` and `|` segments and
//! turns only at `+` junctions or on letters. Uppercase letters met on the way
//! are collected, each cell at most once.
//!
//! ## Example
//!
//! ```rust
//! let map = "\
//! @---A---+
//!         |
//! x-B-+   C
//!     |   |
//!     +---+";
//!
//! let trace = asciipath::trace(map).unwrap();
//! assert_eq!(trace.letters_string(), "ACB");
//! assert_eq!(trace.path_string(), "@---A---+|C|+---+|+-B-x");
//! ```
//!
//! Maps that are ambiguous or broken are rejected with a [`TraceError`]:
//!
//! ```rust
//! use asciipath::TraceError;
//!
//! let err = asciipath::trace("@-x-@").unwrap_err();
//! assert_eq!(err, TraceError::MultipleStartOrEnd);
//! assert_eq!(err.to_string(), "Multiple start or end characters found");
//! ```

pub mod chars;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod position;
pub mod report;
pub mod step;
pub mod traverse;
pub mod validate;

use log::debug;

pub use error::{ErrorKind, Result, TraceError};
pub use grid::Grid;
pub use position::{Direction, Position};
pub use step::{StandardRules, StepRules};
pub use traverse::{Trace, TraceOptions, Tracer};

/// Trace the path on `grid` with default options.
pub fn run(grid: &Grid) -> Result<Trace> {
    run_with_options(grid, &TraceOptions::default())
}

/// Trace the path on `grid`.
///
/// Validates that there is exactly one start and one end marker, then walks
/// from one to the other. The first failure encountered is returned.
pub fn run_with_options(grid: &Grid, options: &TraceOptions) -> Result<Trace> {
    let result = validate::validate_start_and_end(grid)
        .and_then(|(start, end)| Tracer::new(grid, options).traverse(start, end));

    match &result {
        Ok(trace) => debug!(
            "traced {} characters, letters {:?}",
            trace.path.len(),
            trace.letters_string()
        ),
        Err(err) => debug!("map rejected: {err}"),
    }
    result
}

/// Parse `map` and trace its path with default options.
pub fn trace(map: &str) -> Result<Trace> {
    run(&Grid::new(map))
}
