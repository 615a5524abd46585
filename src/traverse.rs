//! Walking the path from the start marker to the end marker.

use std::collections::HashSet;

use log::{debug, trace};

use crate::chars::is_capital_letter;
use crate::error::{Result, TraceError};
use crate::grid::Grid;
use crate::position::Position;
use crate::step::{next_step, StandardRules, StepRules};

/// Options for tracing a map.
///
/// # Example
///
/// ```rust
/// use asciipath::{run_with_options, Grid, TraceOptions};
///
/// let grid = Grid::new("@--x");
/// let options = TraceOptions::new().with_step_limit(10);
/// let trace = run_with_options(&grid, &options).unwrap();
/// assert_eq!(trace.path_string(), "@--x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceOptions {
    /// Maximum number of steps before giving up with
    /// [`TraceError::PathDidNotTerminate`]. When unset, four steps per grid
    /// cell are allowed: the walk is decided by position and heading alone,
    /// so anything longer must be going round in circles.
    pub step_limit: Option<usize>,
}

impl TraceOptions {
    pub fn new() -> Self {
        Self { step_limit: None }
    }

    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    fn step_limit_for(&self, grid: &Grid) -> usize {
        self.step_limit
            .unwrap_or_else(|| grid.cell_count().saturating_mul(4).saturating_add(1))
    }
}

/// Result of a successful traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// Every character stepped on, in order, including both markers
    pub path: Vec<char>,
    /// Letters in the order first collected. A cell visited twice counts once.
    pub letters: Vec<char>,
}

impl Trace {
    pub fn path_string(&self) -> String {
        self.path.iter().collect()
    }

    pub fn letters_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Per-call accumulator
#[derive(Default)]
struct Walk {
    trace: Trace,
    visited: HashSet<Position>,
}

impl Walk {
    fn visit(&mut self, grid: &Grid, pos: Position) -> Result<()> {
        let c = grid
            .get(pos)
            .ok_or(TraceError::CharacterNotFound { at: pos })?;

        self.trace.path.push(c);
        if self.visited.insert(pos) && is_capital_letter(c) {
            self.trace.letters.push(c);
        }
        Ok(())
    }
}

/// Drives [`next_step`] over a grid until the end marker is reached
pub struct Tracer<'a, R = StandardRules> {
    grid: &'a Grid,
    rules: R,
    step_limit: usize,
}

impl<'a> Tracer<'a> {
    pub fn new(grid: &'a Grid, options: &TraceOptions) -> Self {
        Self::with_rules(grid, StandardRules, options)
    }
}

impl<'a, R: StepRules> Tracer<'a, R> {
    pub fn with_rules(grid: &'a Grid, rules: R, options: &TraceOptions) -> Self {
        Self {
            grid,
            rules,
            step_limit: options.step_limit_for(grid),
        }
    }

    /// Walk from `start` until `end` is stepped on.
    ///
    /// Anything on the grid past `end` is never looked at.
    pub fn traverse(&self, start: Position, end: Position) -> Result<Trace> {
        let start = start.ensure_valid()?;
        let end = end.ensure_valid()?;

        let mut walk = Walk::default();
        walk.visit(self.grid, start)?;

        let mut current = start;
        let mut previous = None;
        let mut steps = 0;

        loop {
            if steps >= self.step_limit {
                return Err(TraceError::PathDidNotTerminate { steps });
            }

            let next = next_step(&self.rules, self.grid, current, previous)?;
            steps += 1;
            trace!("step {steps}: ({current}) -> ({next})");

            previous = Some(current);
            current = next;
            walk.visit(self.grid, current)?;

            if current == end {
                break;
            }
        }

        debug!("reached end at ({end}) after {steps} steps");
        Ok(walk.trace)
    }
}
