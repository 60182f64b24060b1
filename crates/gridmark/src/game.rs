//! A single match: one owned grid plus its precomputed lines.

use super::{Grid, GridError, Line, Lines, MoveResult, Outcome};
use tracing::{info, instrument};

/// Tic-tac-toe match on an NxN grid.
///
/// Owns its grid explicitly; there is no shared or global board. The match
/// keeps accepting moves after a win, so callers that want play to stop
/// must check [`Match::evaluate`] before forwarding input.
#[derive(Debug, Clone)]
pub struct Match {
    grid: Grid,
    lines: Lines,
}

impl Match {
    /// Starts a match on a `size` x `size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridErrorKind::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        let grid = Grid::new(size)?;
        let lines = Lines::for_grid(&grid);
        info!(size, lines = lines.len(), "Match started");
        Ok(Self { grid, lines })
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the precomputed lines.
    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Offers the current player's mark at `index`.
    ///
    /// See [`Grid::apply_move`].
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, GridError> {
        self.grid.apply_move(index)
    }

    /// Current match status.
    pub fn evaluate(&self) -> Outcome {
        self.lines.evaluate(&self.grid)
    }

    /// The line deciding the current outcome, if any.
    pub fn winning_line(&self) -> Option<&Line> {
        self.lines.winning_line(&self.grid)
    }
}
