//! Win detection for NxN tic-tac-toe.
//!
//! Lines are derived once from the grid size and never change afterwards.
//! Evaluation rescans every line on each call; at these sizes there is
//! nothing to gain from caching.

use super::{Grid, GridError, GridErrorKind, Outcome, Player, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which part of the grid a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// A full row.
    #[display("row {}", _0)]
    Row(usize),
    /// A full column.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One winning combination: exactly `size` cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cell indices along the line.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Returns the player holding every cell of this line, if any.
    pub fn holder(&self, grid: &Grid) -> Option<Player> {
        let (first, rest) = self.cells.split_first()?;
        let player = grid.get(*first)?.player()?;
        rest.iter()
            .all(|&i| grid.get(i) == Some(Square::Occupied(player)))
            .then_some(player)
    }
}

/// Every line of a grid, in scan order: rows, columns, main diagonal,
/// anti-diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lines {
    size: usize,
    lines: Vec<Line>,
}

impl Lines {
    /// Derives the `2 * size + 2` lines of a `size` x `size` grid.
    ///
    /// For `size == 1` all four kinds collapse onto the single cell; they
    /// are kept as four separate lines.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::InvalidSize`] if `size` is zero or too large
    /// for its cell or line count to fit in `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        let cells = size.checked_mul(size);
        let count = size.checked_mul(2).and_then(|v| v.checked_add(2));
        if size < 1 || cells.is_none() || count.is_none() {
            return Err(GridError::new(GridErrorKind::InvalidSize(size)));
        }
        Ok(Self::derive(size))
    }

    /// Derives the lines matching an existing grid.
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn for_grid(grid: &Grid) -> Self {
        Self::derive(grid.size())
    }

    fn derive(size: usize) -> Self {
        let n = size;
        let mut lines = Vec::with_capacity(2 * n + 2);

        for r in 0..n {
            lines.push(Line {
                kind: LineKind::Row(r),
                cells: (0..n).map(|c| r * n + c).collect(),
            });
        }
        for c in 0..n {
            lines.push(Line {
                kind: LineKind::Column(c),
                cells: (0..n).map(|r| r * n + c).collect(),
            });
        }
        lines.push(Line {
            kind: LineKind::MainDiagonal,
            cells: (0..n).map(|i| i * n + i).collect(),
        });
        lines.push(Line {
            kind: LineKind::AntiDiagonal,
            cells: (0..n).map(|i| i * n + (n - 1 - i)).collect(),
        });

        debug!(size, count = lines.len(), "Derived lines");
        Self { size, lines }
    }

    /// Grid size these lines were derived for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates the lines in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// All lines as a slice.
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// The line that decides [`Lines::evaluate`]: the last fully held line
    /// in scan order.
    ///
    /// Under alternating play with moves suppressed after a win there is at
    /// most one holder. If both players somehow hold lines, whichever is
    /// found last wins; that order is incidental, not a guarantee.
    #[instrument(skip_all, fields(size = self.size))]
    pub fn winning_line(&self, grid: &Grid) -> Option<&Line> {
        debug_assert_eq!(grid.size(), self.size, "lines derived for another grid size");
        self.lines
            .iter()
            .rev()
            .find(|line| line.holder(grid).is_some())
    }

    /// Reports whether either player holds a full line.
    ///
    /// `grid` must have the size these lines were derived for. Debug builds
    /// panic on a mismatch.
    #[instrument(skip_all, fields(size = self.size))]
    pub fn evaluate(&self, grid: &Grid) -> Outcome {
        self.winning_line(grid)
            .and_then(|line| line.holder(grid))
            .map(Outcome::won_by)
            .unwrap_or(Outcome::InProgress)
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
